mod common;

#[test]
fn test_generate_simple_csv() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("generated.csv");
    common::generate_csv(&output_path, 3, 5).expect("Failed to generate CSV");

    let content = std::fs::read_to_string(&output_path).expect("Failed to read file");
    // Header + 3 accounts + 5 deposits
    assert_eq!(content.lines().count(), 9);
}

#[test]
fn test_generated_deposits_spread_across_accounts() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("spread.csv");
    common::generate_csv(&output_path, 50, 1000).expect("Failed to generate CSV");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(&output_path)
        .expect("Failed to open CSV");

    let mut accounts = std::collections::HashSet::new();
    for result in reader.records() {
        let record = result.expect("Failed to read record");
        if &record[0] == "deposit" {
            accounts.insert(record[1].to_string());
        }
    }
    assert_eq!(accounts.len(), 50);
}
