use crate::helpers::TestContext;
use hyper::StatusCode;

#[tokio::test]
async fn it_should_report_liveness() {
    let ctx = TestContext::with_happy_aws().await;

    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body_bytes, b"OK");
}

#[tokio::test]
async fn it_should_report_ready_when_storage_reachable() {
    let ctx = TestContext::with_happy_aws().await;

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["storage"], "connected");
}

#[tokio::test]
async fn it_should_report_not_ready_when_storage_unreachable() {
    let ctx = TestContext::with_unreachable_aws().await;

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["status"], "not_ready");
    assert_eq!(body["storage"], "disconnected");
}
