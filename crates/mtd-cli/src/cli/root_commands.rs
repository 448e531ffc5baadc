use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Ask the model for material and save it as .docx.
    Generate(GenerateArgs),
    /// Render existing model text (file or stdin) to .docx without calling the model.
    Render(RenderArgs),
    /// Print the cleaned-up lines the renderer would see.
    Normalize(NormalizeArgs),
    /// Save the last generated document again.
    Last(LastArgs),
    /// Check whether a phone number is on the allow-list.
    Access(AccessArgs),
    /// Print the JSON schema of a generation request.
    Schema(SchemaArgs),
}

/// Metadata printed in the document frame.
#[derive(Clone, Debug, Args)]
pub struct DocumentArgs {
    /// Subject, e.g. "Алгебра".
    #[arg(long)]
    pub subject: String,
    /// Grade 1-11.
    #[arg(long)]
    pub grade: u8,
    /// Lesson topic; becomes the document title.
    #[arg(long)]
    pub topic: String,
    /// Maximum total score.
    #[arg(long, default_value_t = 10)]
    pub max_score: u32,
    /// worksheet, summative, lesson-plan, test, inclusion
    #[arg(long, default_value = "worksheet")]
    pub kind: String,
    /// Student name for individualized material.
    #[arg(long)]
    pub student: Option<String>,
    /// Variant number; adds a subtitle.
    #[arg(long)]
    pub variant: Option<u32>,
    /// bilingual, kazakh, russian, english (defaults to config).
    #[arg(long)]
    pub language: Option<String>,
    /// Teacher name for the signature line (defaults to config).
    #[arg(long)]
    pub teacher: Option<String>,
    /// Output file (defaults to a generated name in the current directory).
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub document: DocumentArgs,
    /// Learning goals (curriculum codes and free text).
    #[arg(long)]
    pub goals: String,
    /// Extra instruction appended to the prompt.
    #[arg(long)]
    pub instruction: Vec<String>,
    /// Caller phone number, required when access control is enabled.
    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub document: DocumentArgs,
    /// Text file with model output; reads stdin when omitted or "-".
    pub input: Option<PathBuf>,
    /// Print the rendered block model instead of writing a .docx.
    #[arg(long)]
    pub blocks: bool,
}

#[derive(Clone, Debug, Args)]
pub struct NormalizeArgs {
    /// Text file with model output; reads stdin when omitted or "-".
    pub input: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct LastArgs {
    /// Destination (defaults to the cached file name in the current directory).
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Print the cached preview text instead of saving.
    #[arg(long)]
    pub preview: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AccessArgs {
    /// Phone number in any common format.
    pub phone: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema to print.
    #[arg(long = "type", default_value = "request")]
    pub type_name: String,
}
