mod support;

use serde_json::json;
use siumai_provider_openrouter::error::ValidationIssue;
use siumai_provider_openrouter::prelude::*;
use support::{RecordingTransport, provider_with};

const MODEL: &str = "openai/text-embedding-3-small";

fn embedding_response(vectors: Vec<serde_json::Value>, usage: Option<serde_json::Value>) -> serde_json::Value {
    let data: Vec<_> = vectors
        .into_iter()
        .enumerate()
        .map(|(i, v)| json!({"object": "embedding", "embedding": v, "index": i}))
        .collect();
    let mut body = json!({"object": "list", "data": data, "model": MODEL});
    if let Some(u) = usage {
        body["usage"] = u;
    }
    body
}

fn model(transport: &RecordingTransport, settings: OpenRouterEmbeddingSettings) -> OpenRouterEmbeddingModel {
    provider_with(transport, Default::default()).text_embedding_model(MODEL, settings)
}

#[tokio::test]
async fn embeds_a_single_value_with_usage_and_cost() {
    let transport = RecordingTransport::json(json!({
        "id": "test-id",
        "object": "list",
        "data": [{"object": "embedding", "embedding": vec![0.1; 1536], "index": 0}],
        "model": MODEL,
        "usage": {"prompt_tokens": 5, "total_tokens": 5, "cost": 0.00001}
    }));

    let result = model(&transport, Default::default())
        .do_embed(EmbedOptions::new(["sunny day at the beach"]))
        .await
        .expect("embed ok");

    assert_eq!(result.embeddings.len(), 1);
    assert_eq!(result.embeddings[0].len(), 1536);
    assert_eq!(result.usage, Some(EmbeddingUsage { tokens: 5 }));
    let meta = result.provider_metadata.expect("metadata");
    assert_eq!(meta["openrouter"]["usage"]["cost"], json!(0.00001));
    assert_eq!(result.response.headers.get("content-type").unwrap(), "application/json");

    let call = transport.last();
    assert_eq!(call.url, "https://openrouter.ai/api/v1/embeddings");
    assert_eq!(call.ctx.provider_id, "openrouter");
}

#[tokio::test]
async fn embeds_multiple_values_in_order() {
    let transport = RecordingTransport::json(embedding_response(
        vec![json!(vec![0.1; 1536]), json!(vec![0.2; 1536]), json!(vec![0.3; 1536])],
        Some(json!({"prompt_tokens": 15, "total_tokens": 15})),
    ));

    let result = model(&transport, Default::default())
        .do_embed(EmbedOptions::new([
            "sunny day at the beach",
            "rainy day in the city",
            "snowy mountain peak",
        ]))
        .await
        .expect("embed ok");

    assert_eq!(result.count(), 3);
    assert_eq!(result.dimension(), Some(1536));
    assert_eq!(result.embeddings[1][0], 0.2);
    assert_eq!(result.embeddings[2][0], 0.3);
    assert_eq!(result.usage, Some(EmbeddingUsage { tokens: 15 }));
    assert!(result.provider_metadata.is_none());
}

#[tokio::test]
async fn passes_settings_into_request_body() {
    let transport = RecordingTransport::json(embedding_response(
        vec![json!(vec![0.1; 4])],
        Some(json!({"prompt_tokens": 5, "total_tokens": 5})),
    ));
    let settings = OpenRouterEmbeddingSettings {
        user: Some("test-user-123".into()),
        provider: Some(ProviderRouting::default().order(["openai"]).allow_fallbacks(false)),
        extra_body: None,
    };

    model(&transport, settings)
        .do_embed(EmbedOptions::new(["test input"]))
        .await
        .expect("embed ok");

    assert_eq!(
        transport.last().body,
        json!({
            "model": MODEL,
            "input": ["test input"],
            "user": "test-user-123",
            "provider": {"order": ["openai"], "allow_fallbacks": false}
        })
    );
}

#[tokio::test]
async fn explicit_fields_win_over_extra_body() {
    let transport = RecordingTransport::json(embedding_response(vec![json!([0.5])], None));
    let mut provider_extra = serde_json::Map::new();
    provider_extra.insert("model".into(), json!("overridden"));
    provider_extra.insert("dimensions".into(), json!(256));
    let provider = provider_with(
        &transport,
        OpenRouterProviderSettings {
            extra_body: Some(provider_extra),
            ..Default::default()
        },
    );
    let mut model_extra = serde_json::Map::new();
    model_extra.insert("dimensions".into(), json!(512));
    let model = provider.text_embedding_model(
        MODEL,
        OpenRouterEmbeddingSettings {
            extra_body: Some(model_extra),
            ..Default::default()
        },
    );

    model.do_embed(EmbedOptions::new(["x"])).await.expect("embed ok");

    let body = transport.last().body;
    assert_eq!(body["model"], MODEL);
    assert_eq!(body["dimensions"], 512);
}

#[tokio::test]
async fn missing_usage_yields_no_usage_and_no_metadata() {
    let transport = RecordingTransport::json(embedding_response(vec![json!(vec![0.1; 8])], None));

    let result = model(&transport, Default::default())
        .do_embed(EmbedOptions::new(["test"]))
        .await
        .expect("embed ok");

    assert_eq!(result.embeddings.len(), 1);
    assert!(result.usage.is_none());
    assert!(result.provider_metadata.is_none());
}

#[tokio::test]
async fn coerces_string_elements_and_keyed_objects() {
    let transport = RecordingTransport::json(embedding_response(
        vec![
            json!(["0.25", "-1.5", 3]),
            json!({"2": 0.3, "0": 0.1, "1": "0.2"}),
        ],
        None,
    ));

    let result = model(&transport, Default::default())
        .do_embed(EmbedOptions::new(["a", "b"]))
        .await
        .expect("embed ok");

    assert_eq!(result.embeddings[0], vec![0.25, -1.5, 3.0]);
    assert_eq!(result.embeddings[1], vec![0.1, 0.2, 0.3]);
}

#[tokio::test]
async fn one_bad_element_fails_the_whole_call() {
    let transport = RecordingTransport::json(embedding_response(
        vec![json!([0.1, 0.2]), json!([0.1, "not-a-number"])],
        Some(json!({"prompt_tokens": 2, "total_tokens": 2})),
    ));

    let err = model(&transport, Default::default())
        .do_embed(EmbedOptions::new(["a", "b"]))
        .await
        .unwrap_err();

    match err {
        LlmError::ResponseValidationError { path, issue, .. } => {
            assert_eq!(path, "data[1].embedding[1]");
            assert_eq!(issue, ValidationIssue::NonNumericElement);
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let transport = RecordingTransport::raw(200, "{\"object\": \"list\", ");

    let err = model(&transport, Default::default())
        .do_embed(EmbedOptions::new(["a"]))
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::JsonError(_)), "got {err:?}");
}

#[tokio::test]
async fn wrong_shape_is_rejected() {
    let transport = RecordingTransport::json(json!({
        "object": "list",
        "data": [{"object": "embedding", "embedding": "0.1,0.2"}],
        "model": MODEL
    }));

    let err = model(&transport, Default::default())
        .do_embed(EmbedOptions::new(["a"]))
        .await
        .unwrap_err();

    match err {
        LlmError::ResponseValidationError { path, issue, .. } => {
            assert_eq!(path, "data[0].embedding");
            assert_eq!(issue, ValidationIssue::WrongType);
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn api_errors_carry_vendor_message() {
    let transport = RecordingTransport::raw(
        401,
        json!({"error": {"message": "No auth credentials found", "code": 401}}).to_string(),
    );

    let err = model(&transport, Default::default())
        .do_embed(EmbedOptions::new(["a"]))
        .await
        .unwrap_err();

    match err {
        LlmError::ApiError { code, message, details } => {
            assert_eq!(code, 401);
            assert_eq!(message, "No auth credentials found");
            assert!(details.is_some());
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn per_call_headers_are_sent() {
    let transport = RecordingTransport::json(embedding_response(vec![json!([1.0])], None));

    model(&transport, Default::default())
        .do_embed(EmbedOptions::new(["a"]).with_header("X-Trace", "t-1"))
        .await
        .expect("embed ok");

    assert_eq!(support::header(&transport.last(), "x-trace").as_deref(), Some("t-1"));
}
