//! One full computation run over a season's raw data.

use super::{
    adjust::GameAdjuster,
    aggregate::{aggregate_players, QualificationFilter},
    baseline::{LeagueBaseline, OpponentStatsIndex},
    ingest::load_game_records,
    models::PlayerSeasonSummary,
    rank::rank_players,
    scale::PointsPlusScaler,
    volatility::VolatilityAnalyzer,
};
use crate::{
    cli::types::{Season, TeamId},
    config::{PipelineConfig, QualifyingCriteria},
    error::Result,
    storage::{GameLogRow, RawSeasonData, TeamRecord},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Self-consistent output of a run, ready for the output builders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonResult {
    pub season: Season,
    pub criteria: QualifyingCriteria,
    pub baseline: LeagueBaseline,
    pub league_avg_adjusted_ppg: f64,
    /// Qualifying players in rank order.
    pub players: Vec<PlayerSeasonSummary>,
    /// Players with at least one valid game, qualifying or not.
    pub players_considered: usize,
    /// Game log rows dropped for missing minutes or points.
    pub excluded_game_rows: usize,
    pub latest_game_date: Option<String>,
}

impl SeasonResult {
    /// Mean of the published (rounded) Points+ values; 100 up to rounding.
    pub fn league_avg_points_plus(&self) -> f64 {
        let values: Vec<f64> = self.players.iter().map(|p| p.points_plus).collect();
        super::mean(&values).map(super::round1).unwrap_or(0.0)
    }
}

/// Run every stage in dependency order.
///
/// Baseline before adjustment, adjustment before aggregation, qualification
/// before the scaling denominator, scaling before volatility and ranking.
/// Only teams in the configured conferences form the league, and only their
/// players' game logs are considered. Any error aborts the whole run;
/// nothing partial is returned.
pub fn run_pipeline(data: &RawSeasonData, config: &PipelineConfig) -> Result<SeasonResult> {
    let covered: Vec<TeamRecord> = data
        .teams
        .iter()
        .filter(|t| config.conferences.contains(&t.conference))
        .cloned()
        .collect();

    let opponents = OpponentStatsIndex::from_schedules(&data.schedules, &covered);
    let baseline = LeagueBaseline::compute(&opponents)?;

    let covered_ids: BTreeSet<TeamId> = covered.iter().map(|t| t.team_id).collect();
    let rows: Vec<GameLogRow> = data
        .game_logs
        .iter()
        .filter(|r| covered_ids.contains(&r.team_id))
        .cloned()
        .collect();

    let records = load_game_records(&rows);
    let excluded_game_rows = rows.len() - records.len();
    if excluded_game_rows > 0 {
        warn!("{} game log rows excluded for missing stats", excluded_game_rows);
    }
    let latest_game_date = records.iter().map(|r| r.date.clone()).max();

    let adjuster = GameAdjuster::new(&baseline, &opponents);
    let adjusted = adjuster.adjust_all(records);

    let aggregates = aggregate_players(adjusted);
    let players_considered = aggregates.len();

    let qualified = QualificationFilter::new(config.criteria).apply(aggregates);
    let scaler = PointsPlusScaler::from_qualified(&qualified)?;
    let scored = scaler.score_all(qualified);

    let volatility = VolatilityAnalyzer::analyze(&scored);
    let players = rank_players(scored, &volatility);

    info!(
        "Season {} computed: {} ranked of {} players considered",
        config.season.label(),
        players.len(),
        players_considered
    );

    Ok(SeasonResult {
        season: config.season,
        criteria: config.criteria,
        baseline,
        league_avg_adjusted_ppg: scaler.league_avg_adjusted_ppg(),
        players,
        players_considered,
        excluded_game_rows,
        latest_game_date,
    })
}
