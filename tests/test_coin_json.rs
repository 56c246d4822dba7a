use anyhow::Result;
use numisma::domain::{CoinAnalysisResult, CoinRecord};
use numisma::util::testing::sample_coin;

#[test]
fn given_record_when_serializing_to_json_then_contains_all_fields() -> Result<()> {
    // Arrange
    let mut coin = sample_coin("abc-123", "Lincoln Penny", "USA");
    coin.year = "1945".to_string();
    coin.description = "Wheat reverse.".to_string();
    coin.composition = Some("95% Copper".to_string());
    coin.estimated_value = Some("$1 - $5".to_string());

    // Act
    let json = serde_json::to_string_pretty(&coin)?;

    // Assert
    assert!(json.contains(r#""id": "abc-123""#));
    assert!(json.contains(r#""title": "Lincoln Penny""#));
    assert!(json.contains(r#""country": "USA""#));
    assert!(json.contains(r#""year": "1945""#));
    assert!(json.contains(r#""image": "data:image/jpeg;base64,"#));
    assert!(json.contains(r#""composition": "95% Copper""#));
    Ok(())
}

#[test]
fn given_record_when_serializing_then_uses_camel_case_fields() -> Result<()> {
    // Arrange
    let mut coin = sample_coin("abc", "Penny", "USA");
    coin.estimated_value = Some("$1".to_string());

    // Act
    let json = serde_json::to_string(&coin)?;

    // Assert - the document format is camelCase, not snake_case
    assert!(json.contains(r#""estimatedValue""#));
    assert!(json.contains(r#""dateAdded""#));
    assert!(!json.contains(r#""estimated_value""#));
    assert!(!json.contains(r#""date_added""#));
    Ok(())
}

#[test]
fn given_record_without_optionals_when_serializing_then_omits_their_keys() -> Result<()> {
    // Arrange
    let coin = sample_coin("abc", "Penny", "USA");

    // Act
    let json = serde_json::to_string(&coin)?;

    // Assert
    assert!(!json.contains("composition"));
    assert!(!json.contains("estimatedValue"));
    Ok(())
}

#[test]
fn given_serialized_record_when_deserializing_then_round_trips_exactly() -> Result<()> {
    // Arrange
    let mut coin = sample_coin("abc", "Penny", "USA");
    coin.composition = Some("Bronze".to_string());

    // Act
    let json = serde_json::to_string(&coin)?;
    let read_back: CoinRecord = serde_json::from_str(&json)?;

    // Assert
    assert_eq!(read_back, coin);
    Ok(())
}

#[test]
fn given_document_missing_description_when_deserializing_then_defaults_to_empty() -> Result<()> {
    // Arrange - an older document that never stored a description
    let json = r#"{
        "id": "abc",
        "title": "Penny",
        "country": "USA",
        "year": "1900",
        "image": "data:image/jpeg;base64,AA==",
        "dateAdded": "2024-01-15T10:30:00Z"
    }"#;

    // Act
    let coin: CoinRecord = serde_json::from_str(json)?;

    // Assert
    assert_eq!(coin.description, "");
    assert!(coin.composition.is_none());
    Ok(())
}

#[test]
fn given_analysis_json_when_deserializing_then_camel_case_value_maps() -> Result<()> {
    // Arrange
    let json = r#"{
        "title": "Denarius",
        "country": "Rome",
        "year": "Unknown",
        "description": "Silver.",
        "estimatedValue": "$50+"
    }"#;

    // Act
    let analysis: CoinAnalysisResult = serde_json::from_str(json)?;

    // Assert
    assert_eq!(analysis.estimated_value.as_deref(), Some("$50+"));
    Ok(())
}
