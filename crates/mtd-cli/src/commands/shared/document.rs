//! Turn `DocumentArgs` plus config defaults into core request types.

use mtd_config::MetodistConfig;
use mtd_core::{DocumentKind, GenerationRequest, Grade, Language, MaxScore};
use mtd_render::DocumentMeta;

use crate::cli::root_commands::DocumentArgs;
use crate::commands::shared::parse::parse_enum;

/// A validated generation request; flags override `[document]` config.
pub fn build_request(
    args: &DocumentArgs,
    goals: &str,
    config: &MetodistConfig,
) -> anyhow::Result<GenerationRequest> {
    let request = GenerationRequest {
        subject: args.subject.clone(),
        grade: Grade::new(args.grade)?,
        topic: args.topic.clone(),
        goals: goals.to_string(),
        max_score: MaxScore::new(args.max_score)?,
        kind: parse_enum::<DocumentKind>(&args.kind, "kind")?,
        student: args.student.clone(),
        variant: args.variant,
        language: language(args, config)?,
        teacher: args
            .teacher
            .clone()
            .unwrap_or_else(|| config.document.teacher.clone()),
    };
    Ok(request.validate()?)
}

/// Frame metadata for rendering text that did not come from a prompt.
pub fn build_meta(args: &DocumentArgs, config: &MetodistConfig) -> anyhow::Result<DocumentMeta> {
    // Goals only feed the prompt; the topic stands in so validation passes.
    let request = build_request(args, &args.topic, config)?;
    Ok(DocumentMeta::from(&request))
}

fn language(args: &DocumentArgs, config: &MetodistConfig) -> anyhow::Result<Language> {
    args.language
        .as_deref()
        .map_or(Ok(config.document.language), |raw| {
            parse_enum::<Language>(raw, "language")
        })
}
