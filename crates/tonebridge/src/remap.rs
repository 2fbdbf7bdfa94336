use clap::Args;
use tonebridge_palette::{PaletteError, PaletteEntry, TargetScale, remap};

use crate::error::{Result, ToneError};
use crate::inputs::{InputArgs, LoadedInputs, PolicyArgs};

#[derive(Debug, Clone, Default, Args)]
pub struct RemapArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Ramp name in the source palette, e.g. `blue`.
    pub hue: String,
}

pub fn run_remap(args: RemapArgs) -> Result<()> {
    let mut loaded = args.inputs.load()?;
    args.policy.apply(&mut loaded);
    let scale = remap_hue(&args.hue, &loaded)?;
    println!("{}", serde_json::to_string_pretty(&scale)?);
    Ok(())
}

/// Remap a single ramp from the loaded source palette.
pub fn remap_hue(hue: &str, loaded: &LoadedInputs) -> Result<TargetScale> {
    let hue = hue.trim();
    if hue.is_empty() {
        return Err(ToneError::invalid("hue name must not be empty"));
    }
    match loaded.source.get(hue) {
        Some(PaletteEntry::Scale(scale)) => {
            Ok(remap(scale, hue, &loaded.defaults, loaded.policy)?)
        }
        Some(PaletteEntry::Singleton(_)) => Err(PaletteError::NotARamp {
            hue: hue.to_string(),
        }
        .into()),
        None => Err(PaletteError::unknown_hue(hue).into()),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use tonebridge_palette::{PaletteError, TargetStep};

    use super::remap_hue;
    use crate::error::ToneError;
    use crate::inputs::{InputArgs, LoadedInputs};

    fn bundled() -> LoadedInputs {
        let temp = tempdir().expect("tempdir");
        InputArgs::default().load_from(temp.path()).expect("bundled inputs")
    }

    #[test]
    fn bundled_blue_takes_framework_950() {
        let scale = remap_hue("blue", &bundled()).unwrap();
        assert_eq!(scale.len(), 11);
        assert_eq!(scale.get(TargetStep::T500), Some("#0f62fe"));
        assert_eq!(scale.get(TargetStep::T950), Some("#172554"));
    }

    #[test]
    fn singleton_is_not_a_ramp() {
        let error = remap_hue("white", &bundled()).unwrap_err();
        assert!(matches!(
            error,
            ToneError::Palette(PaletteError::NotARamp { ref hue }) if hue == "white"
        ));
    }

    #[test]
    fn unknown_hue_is_reported() {
        let error = remap_hue("chartreuse", &bundled()).unwrap_err();
        assert_eq!(error.to_string(), "unknown hue: chartreuse");
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn blank_hue_is_an_invalid_argument() {
        let error = remap_hue("  ", &bundled()).unwrap_err();
        assert!(matches!(error, ToneError::InvalidArgument { .. }));
    }
}
