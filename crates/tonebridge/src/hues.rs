use clap::Args;
use serde::Serialize;
use tonebridge_palette::SourcePalette;

use crate::error::Result;
use crate::inputs::InputArgs;

#[derive(Debug, Clone, Default, Args)]
pub struct ListHuesArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Print the listing as JSON.
    #[arg(long)]
    pub json: bool,
}

/// How the source palette's entries were classified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HueListing {
    pub scales: Vec<String>,
    pub singletons: Vec<String>,
    pub skipped: Vec<String>,
}

impl HueListing {
    #[must_use]
    pub fn from_palette(palette: &SourcePalette) -> Self {
        Self {
            scales: palette.scales().map(|(name, _)| name.to_string()).collect(),
            singletons: palette
                .singletons()
                .map(|(name, _)| name.to_string())
                .collect(),
            skipped: palette.skipped().to_vec(),
        }
    }

    /// One ramp name per line; other entries are annotated.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for name in &self.scales {
            out.push_str(name);
            out.push('\n');
        }
        for name in &self.singletons {
            out.push_str(&format!("{name} (single color)\n"));
        }
        for name in &self.skipped {
            out.push_str(&format!("{name} (skipped)\n"));
        }
        out
    }
}

pub fn run_list_hues(args: ListHuesArgs) -> Result<()> {
    let loaded = args.inputs.load()?;
    let listing = HueListing::from_palette(&loaded.source);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        print!("{}", listing.render_text());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tonebridge_palette::{SourcePalette, builtin};

    use super::HueListing;

    #[test]
    fn bundled_palette_separates_ramps_from_colors() {
        let listing = HueListing::from_palette(&builtin::carbon().unwrap());
        assert_eq!(listing.scales.len(), 12);
        assert_eq!(listing.scales.first().map(String::as_str), Some("blue"));
        assert_eq!(
            listing.singletons,
            vec!["black", "black100", "white", "white0"]
        );
        assert!(listing.skipped.is_empty());
    }

    #[test]
    fn text_listing_annotates_non_ramps() {
        let palette = SourcePalette::from_json_str(
            r##"{"accent": "#ff0000", "broken": [1, 2],
                 "ink": {"10":"#fff","20":"#eee","30":"#ddd","40":"#ccc","50":"#bbb",
                         "60":"#aaa","70":"#999","80":"#666","90":"#333","100":"#000"}}"##,
        )
        .unwrap();
        let listing = HueListing::from_palette(&palette);
        assert_eq!(
            listing.render_text(),
            "ink\naccent (single color)\nbroken (skipped)\n"
        );
    }
}
