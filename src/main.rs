use anyhow::Result;
use question_bank_editor::utils::logging;
use question_bank_editor::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置（config.toml 可选，环境变量覆盖）
    let config = Config::load("config.toml");

    // 初始化并运行应用
    let mut app = App::initialize(config).await?;
    app.run().await?;

    Ok(())
}
