use reqwest::multipart::{Form, Part};

use crate::common::{TestApp, TestResponse, routes};

// Smallest valid PNG: 8-byte signature plus empty IHDR won't pass an image
// decoder, but the server only checks extension and declared content type.
const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

fn image_part(name: &str, size: usize) -> Part {
    let mut bytes = PNG_BYTES.to_vec();
    bytes.resize(size.max(bytes.len()), 0);
    Part::bytes(bytes)
        .file_name(name.to_string())
        .mime_str("image/png")
        .expect("valid mime")
}

async fn send_upload(app: &TestApp, form: Form) -> TestResponse {
    let res = TestApp::client()
        .post(app.url(routes::UPLOAD))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send upload");

    let status = res.status().as_u16();
    let text = res.text().await.expect("Failed to read response body");
    let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::Null);
    TestResponse { status, text, body }
}

#[tokio::test]
async fn uploaded_images_are_stored_and_served_back() {
    let app = TestApp::spawn().await;

    let form = Form::new()
        .part("images", image_part("dog-front.png", 64))
        .part("images", image_part("dog-side.png", 64));

    let res = send_upload(&app, form).await;

    assert_eq!(res.status, 200, "{}", res.text);
    let urls = res.body["urls"].as_array().expect("urls array");
    assert_eq!(urls.len(), 2);

    for url in urls {
        let url = url.as_str().unwrap();
        assert!(url.starts_with("/uploads/"), "{url}");

        let fetched = TestApp::client()
            .get(app.url(url))
            .send()
            .await
            .expect("Failed to fetch stored image");
        assert_eq!(fetched.status().as_u16(), 200);
    }
}

#[tokio::test]
async fn a_non_image_file_is_rejected() {
    let app = TestApp::spawn().await;

    let part = Part::bytes(b"#!/bin/sh\necho pwned\n".to_vec())
        .file_name("script.sh")
        .mime_str("text/x-sh")
        .expect("valid mime");
    let form = Form::new().part("images", part);

    let res = send_upload(&app, form).await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "UPLOAD_REJECTED");
}

#[tokio::test]
async fn a_fourth_file_is_rejected() {
    let app = TestApp::spawn().await;

    let mut form = Form::new();
    for i in 0..4 {
        form = form.part("images", image_part(&format!("dog-{i}.png"), 64));
    }

    let res = send_upload(&app, form).await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "UPLOAD_REJECTED");
}

#[tokio::test]
async fn an_oversize_file_is_rejected() {
    let app = TestApp::spawn().await;

    let form = Form::new().part("images", image_part("huge.png", 5 * 1024 * 1024 + 1));

    let res = send_upload(&app, form).await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "UPLOAD_REJECTED");
}

#[tokio::test]
async fn an_upload_with_no_image_fields_is_rejected() {
    let app = TestApp::spawn().await;

    let form = Form::new().text("note", "no files here");

    let res = send_upload(&app, form).await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "UPLOAD_REJECTED");
}
