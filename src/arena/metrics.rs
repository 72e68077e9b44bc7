use serde::Serialize;

use crate::game::Side;

use super::episode::EpisodeResult;

/// Running totals over a series of episodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArenaMetrics {
    pub games: usize,
    pub white_wins: usize,
    pub black_wins: usize,
    pub draws: usize,
    pub total_moves: usize,
    pub total_captures: usize,
}

impl ArenaMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_episode(&mut self, result: &EpisodeResult) {
        self.games += 1;
        match result.winner {
            Some(Side::White) => self.white_wins += 1,
            Some(Side::Black) => self.black_wins += 1,
            None => self.draws += 1,
        }
        self.total_moves += result.moves;
        self.total_captures += result.captures;
    }

    pub fn wins(&self, side: Side) -> usize {
        match side {
            Side::White => self.white_wins,
            Side::Black => self.black_wins,
        }
    }

    /// Fraction of games won by `side`.
    pub fn win_rate(&self, side: Side) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins(side) as f32 / self.games as f32
    }

    pub fn draw_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.draws as f32 / self.games as f32
    }

    pub fn average_game_length(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.games as f32
    }

    /// JSON report of the totals
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(winner: Option<Side>, moves: usize, captures: usize) -> EpisodeResult {
        EpisodeResult {
            winner,
            moves,
            captures,
            ticks: moves,
        }
    }

    #[test]
    fn test_empty_metrics() {
        let metrics = ArenaMetrics::new();
        assert_eq!(metrics.win_rate(Side::White), 0.0);
        assert_eq!(metrics.draw_rate(), 0.0);
        assert_eq!(metrics.average_game_length(), 0.0);
    }

    #[test]
    fn test_record_episodes() {
        let mut metrics = ArenaMetrics::new();
        metrics.record_episode(&result(Some(Side::White), 10, 3));
        metrics.record_episode(&result(Some(Side::Black), 20, 4));
        metrics.record_episode(&result(Some(Side::White), 6, 3));
        metrics.record_episode(&result(None, 400, 0));

        assert_eq!(metrics.games, 4);
        assert_eq!(metrics.wins(Side::White), 2);
        assert_eq!(metrics.wins(Side::Black), 1);
        assert!((metrics.win_rate(Side::White) - 0.5).abs() < 1e-6);
        assert!((metrics.draw_rate() - 0.25).abs() < 1e-6);
        assert!((metrics.average_game_length() - 109.0).abs() < 1e-6);
        assert_eq!(metrics.total_captures, 10);
    }

    #[test]
    fn test_json_report() {
        let mut metrics = ArenaMetrics::new();
        metrics.record_episode(&result(Some(Side::Black), 12, 3));
        let json: serde_json::Value = serde_json::from_str(&metrics.to_json().unwrap()).unwrap();
        assert_eq!(json["games"], 1);
        assert_eq!(json["black_wins"], 1);
        assert_eq!(json["total_captures"], 3);
    }
}
