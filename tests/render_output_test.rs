use line_screen::adapters::render::DelimitedRenderer;
use line_screen::domain::ports::TableRenderer;
use line_screen::{BatchScorer, EngineSet, ScreenConfig};

#[tokio::test]
async fn rendered_table_round_trips_through_a_file() {
    let scorer = BatchScorer::new(EngineSet::standard(), ScreenConfig::default());
    let table = scorer
        .run("I love this!\nThis is terrible and awful.", true, false)
        .await
        .unwrap();

    let rendered = DelimitedRenderer::csv().render(&table).unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("results.csv");
    std::fs::write(&path, &rendered).unwrap();

    let read_back = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = read_back.lines().collect();

    // header plus one row per input line
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("vader: -1.0 (negative emotion) to +1.0 (positive emotion)"));
    assert!(lines[0].contains("polarity: -1.0 (negative) to +1.0 (positive)"));
    assert!(lines[0].contains("subjectivity: +0.0 (objective) to +1.0 (subjective)"));
    assert!(lines[1].starts_with("1,"));
    assert!(lines[2].starts_with("2,"));
    assert!(lines[1].contains("I love this!"));
}
