use std::path::PathBuf;

use clap::Args;
use tonebridge_palette::{Preset, PresetFormat, build_palette, merge_into_defaults};

use crate::error::Result;
use crate::inputs::{InputArgs, LoadedInputs, PolicyArgs};
use crate::util::write_output;

#[derive(Debug, Clone, Default, Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Output format: json, esm or cjs.
    #[arg(long)]
    pub format: Option<PresetFormat>,

    /// Emit only the derived ramps, without the framework defaults.
    #[arg(long)]
    pub no_merge: bool,

    /// Preset file to write; `-` or unset writes to stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// The rendered preset and where it should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPreset {
    pub content: String,
    pub format: PresetFormat,
    pub output: Option<PathBuf>,
    pub hues: usize,
}

pub fn run_build(args: BuildArgs) -> Result<()> {
    let mut loaded = args.inputs.load()?;
    args.policy.apply(&mut loaded);
    let rendered = render_build(&args, &loaded)?;
    write_output(rendered.output.as_deref(), &rendered.content)?;
    if let Some(path) = &rendered.output {
        tracing::info!(
            path = %path.display(),
            format = %rendered.format,
            hues = rendered.hues,
            "wrote preset"
        );
    }
    Ok(())
}

pub fn render_build(args: &BuildArgs, loaded: &LoadedInputs) -> Result<RenderedPreset> {
    let config = &loaded.config;
    let format = args.format.unwrap_or(config.output.format);
    let merge = config.defaults.merge && !args.no_merge;
    let output = args.output.clone().or_else(|| config.output.path.clone());

    let derived = build_palette(&loaded.source, &loaded.defaults, loaded.policy)?;
    let content = if merge {
        Preset::new(merge_into_defaults(&loaded.defaults, &derived)).render(format)?
    } else {
        Preset::new(&derived).render(format)?
    };

    Ok(RenderedPreset {
        content,
        format,
        output,
        hues: derived.len(),
    })
}
