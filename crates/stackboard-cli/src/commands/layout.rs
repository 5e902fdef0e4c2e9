use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use stackboard_core::board::{Board, BoardLayout, BoardOptions, CoinPair};
use stackboard_core::config::LayoutConfigRepository;
use stackboard_core::skin::BoardSkin;
use stackboard_core::stack::{ProfileId, Variant};
use std::path::PathBuf;

use super::utils::{open_repository, print_json};

#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// Type code or profile id, e.g. INFP or INFP-J
    pub profile: String,

    /// Overrides the variant given in the profile id
    #[arg(long)]
    pub variant: Option<String>,

    /// Inset the pairs toward the center and shrink the bubbles
    #[arg(long)]
    pub compact: bool,

    /// Click a coin before computing the layout (outer or inner); repeatable
    #[arg(long = "toggle", value_name = "COIN")]
    pub toggles: Vec<String>,

    /// Render a non-interactive board; toggles are ignored
    #[arg(long = "static")]
    pub is_static: bool,

    /// Leave ghost hints out of the output
    #[arg(long)]
    pub hide_ghosts: bool,

    /// Rendering skin passed through to the renderer
    #[arg(long, default_value = "glossy")]
    pub skin: String,

    /// Layout configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutOutput {
    profile: String,
    skin: BoardSkin,
    #[serde(flatten)]
    layout: BoardLayout,
}

pub fn run(args: &LayoutArgs) -> Result<()> {
    let mut profile: ProfileId = args
        .profile
        .parse()
        .with_context(|| format!("Unknown profile '{}'", args.profile))?;
    if let Some(variant) = &args.variant {
        profile.variant = variant.parse::<Variant>()?;
    }
    let skin = BoardSkin::parse(&args.skin)?;
    let config = open_repository(args.config.clone())?
        .load()
        .context("Failed to load layout config")?;

    let mut board = Board::new(
        profile.stack(),
        BoardOptions {
            interactive: !args.is_static,
            compact: args.compact,
            show_ghosts: !args.hide_ghosts,
        },
    );
    for toggle in &args.toggles {
        let pair: CoinPair = toggle.parse()?;
        if !board.toggle(pair) {
            tracing::warn!(%pair, "board is static, toggle ignored");
        }
    }

    let layout = board.layout(&config);
    print_json(&LayoutOutput {
        profile: profile.to_string(),
        skin,
        layout,
    })
}
