use crate::snapshot::{Player, Snapshot};

/// Number of players listed when no bound is requested
pub const DEFAULT_TOP_N: usize = 10;
/// Largest bound a caller may request
pub const MAX_TOP_N: usize = 25;
/// Smallest bound a caller may request
pub const MIN_TOP_N: usize = 1;

/// Resolve a user-supplied bound: omitted means the default, anything
/// outside `[MIN_TOP_N, MAX_TOP_N]` is clamped into it.
pub fn clamp_top_n(n: Option<i64>) -> usize {
    match n {
        None => DEFAULT_TOP_N,
        Some(n) => n.clamp(MIN_TOP_N as i64, MAX_TOP_N as i64) as usize,
    }
}

/// A player with its 1-based position in the ranking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedEntry<'a> {
    pub position: usize,
    pub player: &'a Player,
}

/// Players sorted by score (descending) and truncated for display
#[derive(Debug, Clone, PartialEq)]
pub struct RankedView<'a> {
    entries: Vec<RankedEntry<'a>>,
}

impl<'a> RankedView<'a> {
    pub fn entries(&self) -> &[RankedEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedEntry<'a>> {
        self.entries.iter()
    }
}

/// Rank a snapshot's players.
///
/// The sort is stable: players with equal scores keep their file order.
/// `n` is clamped into `[MIN_TOP_N, MAX_TOP_N]`.
pub fn rank(snapshot: &Snapshot, n: usize) -> RankedView<'_> {
    let n = n.clamp(MIN_TOP_N, MAX_TOP_N);

    let mut players: Vec<&Player> = snapshot.players.iter().collect();
    players.sort_by(|a, b| b.score.cmp(&a.score));

    let entries = players
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, player)| RankedEntry {
            position: i + 1,
            player,
        })
        .collect();

    RankedView { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, score: i64) -> Player {
        Player {
            name: Some(name.to_string()),
            score,
            ..Default::default()
        }
    }

    fn snapshot(players: Vec<Player>) -> Snapshot {
        Snapshot {
            players,
            ..Default::default()
        }
    }

    fn names<'a>(view: &'a RankedView<'_>) -> Vec<&'a str> {
        view.iter().map(|e| e.player.display_name()).collect()
    }

    #[test]
    fn test_sorted_by_score_descending() {
        let s = snapshot(vec![player("low", 1), player("high", 50), player("mid", 20)]);
        let view = rank(&s, 10);
        assert_eq!(names(&view), vec!["high", "mid", "low"]);
        let positions: Vec<usize> = view.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_ties_keep_file_order() {
        let s = snapshot(vec![
            player("c", 5),
            player("a", 30),
            player("d", 5),
            player("b", 30),
            player("e", 5),
        ]);
        let view = rank(&s, 10);
        assert_eq!(names(&view), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_truncated_to_bound() {
        let players = (0..40).map(|i| player(&format!("p{i}"), i)).collect();
        let s = snapshot(players);

        assert_eq!(rank(&s, 3).len(), 3);
        assert_eq!(rank(&s, 25).len(), 25);
        // Above the cap
        assert_eq!(rank(&s, 100).len(), 25);
        // Below the floor
        assert_eq!(rank(&s, 0).len(), 1);
        assert_eq!(names(&rank(&s, 1)), vec!["p39"]);
    }

    #[test]
    fn test_fewer_players_than_bound() {
        let s = snapshot(vec![player("solo", 7)]);
        assert_eq!(rank(&s, 10).len(), 1);
        assert!(rank(&Snapshot::default(), 10).is_empty());
    }

    #[test]
    fn test_negative_scores_rank_last() {
        let s = snapshot(vec![player("neg", -3), player("zero", 0)]);
        assert_eq!(names(&rank(&s, 10)), vec!["zero", "neg"]);
    }

    #[test]
    fn test_clamp_top_n() {
        assert_eq!(clamp_top_n(None), 10);
        assert_eq!(clamp_top_n(Some(5)), 5);
        assert_eq!(clamp_top_n(Some(0)), 1);
        assert_eq!(clamp_top_n(Some(-7)), 1);
        assert_eq!(clamp_top_n(Some(26)), 25);
        assert_eq!(clamp_top_n(Some(i64::MAX)), 25);
    }
}
