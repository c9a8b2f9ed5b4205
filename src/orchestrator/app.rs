//! 应用入口 - 编排层
//!
//! 初始化配置、客户端和列表控制器，跑一轮"拉取并预览"。
//! 交互式宿主（浏览器/桌面壳）通过 `controller_mut()` 驱动完整的
//! 增删改查流程；这个二进制入口只做最小的冒烟路径

use crate::clients::BankClient;
use crate::config::Config;
use crate::models::option_label;
use crate::orchestrator::QuestionListController;
use crate::utils::{html, logging};
use anyhow::Result;
use tracing::info;

/// 应用主结构
pub struct App {
    controller: QuestionListController<BankClient>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化会话日志文件
        logging::init_log_file(&config.session_log_file)?;
        logging::log_startup(&config);

        let client = BankClient::new(&config);
        let controller = QuestionListController::new(client, &config);

        Ok(Self { controller })
    }

    /// 运行应用主逻辑：拉取题目集合并输出预览
    pub async fn run(&mut self) -> Result<()> {
        self.controller.refresh().await;
        self.render_list();
        Ok(())
    }

    /// 列表控制器（供宿主驱动增删改查）
    pub fn controller_mut(&mut self) -> &mut QuestionListController<BankClient> {
        &mut self.controller
    }

    /// 输出题目集合的纯文本预览
    fn render_list(&self) {
        let questions = self.controller.questions();
        if questions.is_empty() {
            info!("题库为空");
            return;
        }

        for question in questions {
            info!(
                "Q{} {}",
                question.id,
                logging::truncate_text(&html::to_plain_text(&question.question_text), 80)
            );
            for (i, option) in question.options.iter().enumerate() {
                let mark = if option.is_correct { "✓" } else { " " };
                info!(
                    "  {}. [{}] {}",
                    option_label(i),
                    mark,
                    logging::truncate_text(&html::to_plain_text(&option.text), 60)
                );
            }
        }
    }
}
