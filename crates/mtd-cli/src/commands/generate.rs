use anyhow::Context;
use mtd_access::checker_for;
use mtd_config::MetodistConfig;
use mtd_core::{GeneratedDocument, ResultSlot};
use mtd_genai::{GeminiClient, GenerationError, PromptBuilder, RetryPolicy, generate_with_retry};
use mtd_render::{DocumentMeta, render_to_docx};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::commands::shared::document::build_request;
use crate::commands::shared::input::write_output;
use crate::output::output;
use crate::progress::Progress;
use crate::slot::SlotStore;

/// Handle `metodist generate`.
pub async fn handle(
    args: &GenerateArgs,
    config: &MetodistConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = build_request(&args.document, &args.goals, config)?;

    if config.access.enabled {
        let phone = args
            .phone
            .as_deref()
            .context("access control is enabled: pass --phone")?;
        if !checker_for(&config.access).is_allowed(phone).await {
            anyhow::bail!("access denied for {phone}");
        }
    }

    let genai = config.require_genai()?;
    let client = GeminiClient::from_config(genai);
    let prompt = args
        .instruction
        .iter()
        .fold(PromptBuilder::new(&request), |builder, extra| {
            builder.instruction(extra.clone())
        })
        .build();
    tracing::debug!(kind = %request.kind, model = client.model(), "generating");

    let progress = Progress::spinner("Generating material...");
    let text = match generate_with_retry(&client, &prompt, &RetryPolicy::from(&config.retry)).await
    {
        Ok(text) => {
            progress.finish_clear();
            text
        }
        Err(error) => {
            progress.finish_err("generation failed");
            return Err(user_facing(error));
        }
    };

    let meta = DocumentMeta::from(&request);
    let bytes = render_to_docx(&text, &meta, &config.rules, &config.document.typography)?;
    let document = GeneratedDocument::new(&request.subject, &request.topic, request.kind, text, bytes);
    let path = write_output(args.document.out.as_deref(), &document.file_name, &document.bytes)?;

    let summary = json!({
        "file": path,
        "bytes": document.bytes.len(),
        "kind": document.kind,
        "title": meta.title,
        "created_at": document.created_at,
        "preview_chars": document.preview.chars().count(),
    });

    let mut slot = ResultSlot::new();
    slot.store(document);
    if let Err(error) = SlotStore::default_location().and_then(|store| store.save(&slot)) {
        tracing::warn!(%error, "could not cache last result");
    }

    output(&summary, flags.format)
}

/// Replace transport-level detail with a message a teacher can act on.
fn user_facing(error: GenerationError) -> anyhow::Error {
    match error {
        GenerationError::ResourceExhausted(detail) => anyhow::anyhow!(
            "the model is busy or the quota is exhausted; wait a minute and try again ({detail})"
        ),
        GenerationError::Empty => {
            anyhow::anyhow!("the model returned no text; rephrase the topic or goals and try again")
        }
        other => anyhow::Error::from(other).context("generation failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustion_message_is_actionable() {
        let msg = user_facing(GenerationError::ResourceExhausted("429".into())).to_string();
        assert!(msg.contains("try again"));
        assert!(msg.contains("429"));
    }

    #[test]
    fn empty_message_is_actionable() {
        let msg = user_facing(GenerationError::Empty).to_string();
        assert!(msg.contains("no text"));
    }

    #[test]
    fn other_errors_keep_cause() {
        let err = user_facing(GenerationError::Api {
            status: 403,
            message: "denied".into(),
        });
        assert_eq!(err.to_string(), "generation failed");
        assert!(format!("{err:#}").contains("403"));
    }
}
