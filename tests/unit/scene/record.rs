use serde_json::json;

use super::*;

fn sample() -> serde_json::Value {
    json!({
        "timestamp": "2125-10-18T20:15:00",
        "season": 2,
        "matchday": 7,
        "games": [
            {"home": "Eisbären Nord", "away": "Falken", "home_score": 3, "away_score": 2}
        ],
        "starting_six": {
            "version": 1,
            "seed": 42,
            "source": "replay",
            "players": [
                {"id": "Max_Muster", "pos": "F", "team": "Falken", "number": 17},
                {"id": "A_B", "pos": "G", "team": "Falken"}
            ],
            "meta": {"fallback_used": true, "pool_sizes": {"F": 40, "D": 30, "G": 8}}
        }
    })
}

#[test]
fn parses_loose_fields() {
    let rec: MatchdaySixRecord = serde_json::from_value(sample()).unwrap();
    assert_eq!(rec.season, 2);
    assert_eq!(rec.matchday, Some(7));
    assert_eq!(rec.games[0].home_goals, Some(3));
    assert_eq!(rec.games[0].away_goals, Some(2));

    let six = rec.starting_six().unwrap();
    assert_eq!(six.version.as_deref(), Some("1"));
    assert_eq!(six.seed, Some(42));
    assert_eq!(six.players[0].number.as_deref(), Some("17"));
    assert_eq!(six.players[0].display_name(), "Max Muster");
    assert_eq!(six.players[1].pos, Position::Goalie);
    assert!(six.meta.fallback_used);
    assert_eq!(six.meta.pool_sizes.get("G"), Some(&8));
}

#[test]
fn defaults_apply_to_minimal_record() {
    let rec = MatchdaySixRecord::from_reader(&b"{}"[..]).unwrap();
    assert_eq!(rec.season, 1);
    assert_eq!(rec.matchday_label(), "X");
    assert!(rec.games.is_empty());
    let err = rec.starting_six().unwrap_err();
    assert!(err.to_string().contains("starting_six"));
}

#[test]
fn unknown_position_is_a_serde_error() {
    let mut v = sample();
    v["starting_six"]["players"][0]["pos"] = json!("X");
    let err = MatchdaySixRecord::from_reader(v.to_string().as_bytes()).unwrap_err();
    assert!(matches!(err, CardError::Serde(_)));
}

#[test]
fn malformed_players_is_a_serde_error() {
    let mut v = sample();
    v["starting_six"]["players"] = json!("six players");
    let err = MatchdaySixRecord::from_reader(v.to_string().as_bytes()).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn summary_counts_positions() {
    let rec: MatchdaySixRecord = serde_json::from_value(sample()).unwrap();
    let s = rec.summary();
    assert_eq!(s.games, 1);
    assert!(s.has_starting_six);
    assert_eq!((s.forwards, s.defense, s.goalies), (1, 0, 1));
}

#[test]
fn position_codes_round_trip_through_display() {
    for pos in Position::ALL {
        let v = serde_json::to_value(pos).unwrap();
        assert_eq!(v, json!(pos.to_string()));
    }
}
