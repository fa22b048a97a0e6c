//! Integration tests for the public blog feed.

use ay_group_integration_tests::TestContext;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn create_blog(ctx: &TestContext, body: Value) -> Value {
    let response = ctx
        .client
        .post(ctx.url("/admin/blogs"))
        .json(&body)
        .send()
        .await
        .expect("send create");
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("parse body")
}

/// Anonymous client without the admin's cookie jar.
fn anonymous_client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn drafts_are_invisible_on_the_public_surface() {
    let ctx = TestContext::spawn().await;
    ctx.login().await;

    let draft = create_blog(
        &ctx,
        json!({"title": "Launch", "content": "We shipped.", "published": false}),
    )
    .await;
    let id = draft["id"].as_i64().expect("id");
    let public = anonymous_client();

    // Not in the public list, even though it is the newest post
    let listing = public
        .get(ctx.url("/blogs"))
        .send()
        .await
        .expect("send list");
    assert_eq!(listing.status(), StatusCode::OK);
    let blogs: Value = listing.json().await.expect("parse body");
    assert_eq!(blogs.as_array().map(Vec::len), Some(0));

    // Public get-one must not reveal the draft exists
    let hidden = public
        .get(ctx.url(&format!("/blogs/{id}")))
        .send()
        .await
        .expect("send get");
    assert_eq!(hidden.status(), StatusCode::NOT_FOUND);

    // The admin surface still sees it, draft flag intact
    let admin_view = ctx
        .client
        .get(ctx.url(&format!("/admin/blogs/{id}")))
        .send()
        .await
        .expect("send admin get");
    assert_eq!(admin_view.status(), StatusCode::OK);
    let body: Value = admin_view.json().await.expect("parse body");
    assert_eq!(body["published"], false);
}

#[tokio::test]
async fn draft_404_matches_missing_404() {
    let ctx = TestContext::spawn().await;
    ctx.login().await;

    let draft = create_blog(
        &ctx,
        json!({"title": "Secret", "content": "Hidden", "published": false}),
    )
    .await;
    let draft_id = draft["id"].as_i64().expect("id");
    let public = anonymous_client();

    let for_draft = public
        .get(ctx.url(&format!("/blogs/{draft_id}")))
        .send()
        .await
        .expect("send get");
    let draft_status = for_draft.status();
    let draft_body: Value = for_draft.json().await.expect("parse body");

    let for_missing = public
        .get(ctx.url("/blogs/424242"))
        .send()
        .await
        .expect("send get");
    let missing_status = for_missing.status();
    let missing_body: Value = for_missing.json().await.expect("parse body");

    // Deliberately indistinguishable responses
    assert_eq!(draft_status, StatusCode::NOT_FOUND);
    assert_eq!(missing_status, StatusCode::NOT_FOUND);
    assert_eq!(draft_body, missing_body);
}

#[tokio::test]
async fn published_posts_are_served_newest_first() {
    let ctx = TestContext::spawn().await;
    ctx.login().await;

    let first = create_blog(&ctx, json!({"title": "First", "content": "One"})).await;
    let hidden = create_blog(
        &ctx,
        json!({"title": "Hidden", "content": "Draft", "published": false}),
    )
    .await;
    let second = create_blog(&ctx, json!({"title": "Second", "content": "Two"})).await;
    let public = anonymous_client();

    let listing = public
        .get(ctx.url("/blogs"))
        .send()
        .await
        .expect("send list");
    assert_eq!(listing.status(), StatusCode::OK);
    let blogs: Value = listing.json().await.expect("parse body");
    let ids: Vec<i64> = blogs
        .as_array()
        .expect("array")
        .iter()
        .map(|blog| blog["id"].as_i64().expect("id"))
        .collect();
    assert_eq!(
        ids,
        vec![
            second["id"].as_i64().expect("id"),
            first["id"].as_i64().expect("id")
        ]
    );
    assert!(!ids.contains(&hidden["id"].as_i64().expect("id")));

    // Get-one works anonymously for published posts
    let fetched = public
        .get(ctx.url(&format!(
            "/blogs/{}",
            second["id"].as_i64().expect("id")
        )))
        .send()
        .await
        .expect("send get");
    assert_eq!(fetched.status(), StatusCode::OK);
    let body: Value = fetched.json().await.expect("parse body");
    assert_eq!(body["title"], "Second");
    assert_eq!(body["author"], "AYGroup");
}
