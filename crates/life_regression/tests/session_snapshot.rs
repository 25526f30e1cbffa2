use life_core::PlayerState;
use life_regression::{render_records, scripted_records, DEFAULT_SEED};
use life_script::Step;

fn steps(raw: &[&str]) -> Vec<Step> {
    raw.iter().map(|s| s.parse().unwrap()).collect()
}

#[test]
fn working_day_transcript() {
    let records = scripted_records(
        DEFAULT_SEED,
        &steps(&[
            "go downtown",
            "go work",
            "work",
            "go downtown",
            "go bar",
            "drink",
            "go downtown",
            "go cafe",
            "study",
            "converse",
            "go downtown",
            "go home",
            "sleep",
            "sleep",
        ]),
    );
    insta::assert_snapshot!("working_day", render_records(&records));
}

#[test]
fn initial_state() {
    insta::assert_json_snapshot!("initial_state", PlayerState::default());
}
