use std::fmt;

/// API 调用错误
///
/// 对应同步客户端的三类失败：网络层失败、HTTP 错误状态、响应解码失败。
/// 所有失败都以单一 Result 形式向调用方传播，不做任何自动重试。
#[derive(Debug)]
pub enum ApiError {
    /// 网络请求失败（未收到响应）
    Transport {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 服务端返回非 2xx 状态（错误路径下不假设响应体可解析）
    BadStatus { endpoint: String, status: u16 },
    /// 响应体不是合法 JSON 或形状不符
    Decode {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport { endpoint, source } => {
                write!(f, "网络请求失败 ({}): {}", endpoint, source)
            }
            ApiError::BadStatus { endpoint, status } => {
                write!(f, "服务端返回错误状态 ({}): HTTP {}", endpoint, status)
            }
            ApiError::Decode { endpoint, source } => {
                write!(f, "响应解析失败 ({}): {}", endpoint, source)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport { source, .. } | ApiError::Decode { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            ApiError::BadStatus { .. } => None,
        }
    }
}

// ========== 便捷构造函数 ==========

impl ApiError {
    /// 创建网络请求失败错误
    pub fn transport(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ApiError::Transport {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }

    /// 创建 HTTP 错误状态错误
    pub fn bad_status(endpoint: impl Into<String>, status: u16) -> Self {
        ApiError::BadStatus {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// 创建响应解析失败错误
    pub fn decode(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ApiError::Decode {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }

    /// 是否为资源不存在（HTTP 404）
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::BadStatus { status: 404, .. })
    }
}

/// 提交失败
///
/// 编辑器提交的失败与 API 失败区分开：`NotOpen` 表示编辑器未打开时的
/// 非法提交，`Api` 表示请求本身失败（此时草稿保持不变，可手动重试）
#[derive(Debug)]
pub enum SubmitError {
    /// 编辑器未打开（没有可提交的草稿）
    NotOpen,
    /// API 调用失败
    Api(ApiError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::NotOpen => write!(f, "编辑器未打开，没有可提交的草稿"),
            SubmitError::Api(e) => write!(f, "提交失败: {}", e),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmitError::NotOpen => None,
            SubmitError::Api(e) => Some(e),
        }
    }
}

impl From<ApiError> for SubmitError {
    fn from(err: ApiError) -> Self {
        SubmitError::Api(err)
    }
}

// ========== Result 类型别名 ==========

/// API 调用结果类型
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        assert!(ApiError::bad_status("/api/v1/questions/9", 404).is_not_found());
        assert!(!ApiError::bad_status("/api/v1/questions", 500).is_not_found());
    }

    #[test]
    fn test_display_contains_endpoint() {
        let err = ApiError::bad_status("http://localhost:8080/api/v1/questions", 503);
        let msg = err.to_string();
        assert!(msg.contains("HTTP 503"));
        assert!(msg.contains("/api/v1/questions"));
    }
}
