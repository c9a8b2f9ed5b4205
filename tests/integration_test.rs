use question_bank_editor::utils::logging;
use question_bank_editor::{
    BankClient, Config, QuestionApi, QuestionListController, QuestionOption, QuestionSubmission,
};

fn sample_submission() -> QuestionSubmission {
    QuestionSubmission {
        question_text: "<p>What is 2+2?</p>".to_string(),
        options: vec![
            QuestionOption::new("<p>3</p>", false),
            QuestionOption::new("<p>4</p>", true),
            QuestionOption::new("<p>5</p>", false),
            QuestionOption::new("<p>22</p>", false),
        ],
    }
}

#[tokio::test]
#[ignore] // 默认忽略，需要后端运行：cargo test -- --ignored
async fn test_question_crud_roundtrip() {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();
    let client = BankClient::new(&config);

    // 创建
    let created = client
        .create(&sample_submission())
        .await
        .expect("创建题目失败");

    // 列表应包含新建的题目
    let listed = client.list().await.expect("拉取题目列表失败");
    assert!(
        listed.iter().any(|q| q.id == created.id),
        "列表中应包含新建的题目"
    );

    // 更新
    let mut submission = sample_submission();
    submission.question_text = "<p>2+2 等于多少？</p>".to_string();
    let updated = client
        .update(created.id, &submission)
        .await
        .expect("更新题目失败");
    assert_eq!(updated.id, created.id);

    // 删除
    client.delete(created.id).await.expect("删除题目失败");
    let listed = client.list().await.expect("拉取题目列表失败");
    assert!(
        listed.iter().all(|q| q.id != created.id),
        "删除后的题目不应再出现在列表中"
    );
}

#[tokio::test]
#[ignore]
async fn test_controller_full_flow_against_backend() {
    logging::init();

    let config = Config::from_env();
    let client = BankClient::new(&config);
    let mut controller = QuestionListController::new(client, &config);

    // 新建一道题并提交
    controller.request_create();
    controller.editor_mut().set_stem("<p>集成测试题干</p>");
    controller.editor_mut().set_option_text(0, "<p>对</p>");
    controller.editor_mut().toggle_correct(0);
    controller.editor_mut().set_option_text(1, "<p>错</p>");
    controller.submit().await.expect("提交应成功");

    // 提交成功后集合已刷新，找到刚创建的题目并删除
    let created_id = controller
        .questions()
        .iter()
        .find(|q| q.question_text == "<p>集成测试题干</p>")
        .map(|q| q.id)
        .expect("刷新后的列表应包含新建的题目");

    controller.request_delete(created_id).await;
    assert!(controller.questions().iter().all(|q| q.id != created_id));
}
