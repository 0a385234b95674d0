use crate::club::Team;
use serde::Serialize;
use std::fmt::{Display, Formatter};

const TABLE_WIDTH: usize = 105;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueTableRow {
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goal_scored: u32,
    pub goal_conceded: u32,
    pub points: u32,
}

impl From<&Team> for LeagueTableRow {
    fn from(team: &Team) -> Self {
        LeagueTableRow {
            team_name: team.name.clone(),
            played: team.matches_played,
            won: team.matches_won,
            drawn: team.matches_drawn,
            lost: team.matches_lost,
            goal_scored: team.total_goals_scored,
            goal_conceded: team.total_goals_conceded,
            points: team.total_match_points,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeagueTable {
    pub rows: Vec<LeagueTableRow>,
}

impl LeagueTable {
    /// Ordered by league points, then goals scored, both descending.
    /// The sort is stable: level teams keep their league order.
    pub fn from_teams(teams: &[Team]) -> Self {
        let mut rows: Vec<LeagueTableRow> = teams.iter().map(LeagueTableRow::from).collect();

        rows.sort_by(|a, b| (b.points, b.goal_scored).cmp(&(a.points, a.goal_scored)));

        LeagueTable { rows }
    }

    /// One-based place in the standings
    pub fn position(&self, team_name: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.team_name == team_name).map(|idx| idx + 1)
    }
}

impl Display for LeagueTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:<20}{:<15}{:<6}{:<6}{:<6}{:<15}{:<17}{:<13}",
            "Team Name",
            "Games Played",
            "Won",
            "Drawn",
            "Lost",
            "Goals Scored",
            "Goals Conceded",
            "Total Points"
        )?;
        writeln!(f, "{}", "-".repeat(TABLE_WIDTH))?;

        for row in &self.rows {
            writeln!(
                f,
                "{:<20}{:<15}{:<6}{:<6}{:<6}{:<15}{:<17}{:<13}",
                row.team_name,
                row.played,
                row.won,
                row.drawn,
                row.lost,
                row.goal_scored,
                row.goal_conceded,
                row.points
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str, results: &[(u32, u32)]) -> Team {
        let mut team = Team::new(0, String::from(name));
        for (scored, conceded) in results {
            team.add_match_result(*scored, *conceded, 0).unwrap();
        }
        team
    }

    #[test]
    fn test_sorted_by_points_then_goals() {
        let teams = vec![
            team("Arsenal", &[(1, 0)]),
            team("Chelsea", &[(4, 0)]),
            team("Liverpool", &[(0, 0), (0, 0), (0, 0), (0, 0)]),
            team("Juventus", &[(0, 2)]),
        ];

        let table = LeagueTable::from_teams(&teams);
        let names: Vec<&str> = table.rows.iter().map(|r| r.team_name.as_str()).collect();

        assert_eq!(names, vec!["Liverpool", "Chelsea", "Arsenal", "Juventus"]);
        assert_eq!(table.position("Arsenal"), Some(3));
        assert_eq!(table.position("Liverpool"), Some(1));
        assert_eq!(table.position("Real Madrid"), None);
    }

    #[test]
    fn test_level_teams_keep_input_order() {
        let teams = vec![
            team("AC Milan", &[(2, 1)]),
            team("Inter Milan", &[(2, 0)]),
            team("Juventus", &[(2, 2)]),
        ];

        let table = LeagueTable::from_teams(&teams);

        assert_eq!(table.rows[0].team_name, "AC Milan");
        assert_eq!(table.rows[1].team_name, "Inter Milan");
    }

    #[test]
    fn test_render_fixed_width() {
        let table = LeagueTable::from_teams(&[team("Arsenal", &[(3, 1)])]);
        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Team Name           Games Played   Won"));
        assert_eq!(lines[1], "-".repeat(105));
        assert_eq!(
            lines[2],
            concat!(
                "Arsenal             1              1     0     0     ",
                "3              1                3            "
            )
        );
    }
}
