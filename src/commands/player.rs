//! `player`: print one player's published detail.

use crate::{
    cli::types::PlayerId,
    error::Result,
    output::{read_player, PlayerDetail},
};
use std::path::Path;

pub fn format_detail(detail: &PlayerDetail) -> Vec<String> {
    let p = &detail.player;
    let mut lines = vec![
        format!("{} ({}, {})", p.name, p.team_name, p.conference),
        format!(
            "Rank {} | {} GP | {:.1} MPG | {:.1} PPG | {:.1} adj PPG | {:.1} Points+",
            p.rank, p.gp, p.mpg, p.ppg, p.adj_ppg, p.points_plus
        ),
    ];
    if let (Some(sd), Some(pctile)) = (p.points_plus_std_dev, p.volatility_pctile) {
        lines.push(format!("Volatility: {:.1} std dev ({}th percentile)", sd, pctile));
    }

    lines.push(String::new());
    for game in &detail.game_log {
        lines.push(format!(
            "{}  {:<16} {:<2} {:>3} min {:>3} pts {:>5.1} adj {:>6.1} Points+",
            game.date, game.matchup, game.result, game.min, game.pts, game.adj_pts, game.points_plus
        ));
    }
    lines
}

pub fn handle_player(output_dir: &Path, player_id: PlayerId, as_json: bool) -> Result<()> {
    let detail = read_player(output_dir, player_id)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        for line in format_detail(&detail) {
            println!("{}", line);
        }
    }
    Ok(())
}
