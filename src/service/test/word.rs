use entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

use crate::{error::AppError, model::word::SearchResults, service::word::WordService};

/// Tests that a catalog hit increments every matching row by exactly one
/// and logs the lookup.
///
/// Expected: Ok(Published) with the counter bumped once
#[tokio::test]
async fn search_hit_increments_and_logs() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dictionary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let word = factory::create_word_with_term(db, "Kubernetes").await?;

    let results = WordService::new(db).search("kube", "203.0.113.9").await?;

    match results {
        SearchResults::Published(words) => {
            assert_eq!(words.len(), 1);
            assert_eq!(words[0].term, "Kubernetes");
        }
        SearchResults::Requested(_) => panic!("expected a catalog hit"),
    }

    let stored = entity::prelude::Word::find_by_id(word.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.search_count, 1);

    let lookups = entity::prelude::Lookup::find().all(db).await?;
    assert_eq!(lookups.len(), 1);
    assert_eq!(lookups[0].term, "kube");
    assert_eq!(lookups[0].ip_address, "203.0.113.9");

    Ok(())
}

/// Tests two consecutive searches: the counter moves by one per search.
///
/// Expected: Ok with search_count at 2 afterwards
#[tokio::test]
async fn search_counts_once_per_search() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dictionary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let word = factory::create_word_with_term(db, "Kubernetes").await?;
    let service = WordService::new(db);

    service.search("kube", "203.0.113.9").await?;
    service.search("kube", "203.0.113.9").await?;

    let stored = entity::prelude::Word::find_by_id(word.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.search_count, 2);

    Ok(())
}

/// Tests the ledger fallback on a catalog miss.
///
/// A term present only among pending submissions comes back as a
/// ledger-backed result, and no catalog counter moves.
///
/// Expected: Ok(Requested) with the pending submission
#[tokio::test]
async fn search_falls_back_to_ledger() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dictionary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_word_with_term(db, "mutex").await?;
    factory::request::RequestFactory::new(db)
        .word("GraphQL")
        .description("please add")
        .build()
        .await?;

    let results = WordService::new(db).search("graphql", "203.0.113.9").await?;

    match results {
        SearchResults::Requested(pending) => {
            assert_eq!(pending.len(), 1);
            assert_eq!(pending[0].word, "GraphQL");
        }
        SearchResults::Published(_) => panic!("expected the ledger fallback"),
    }

    // The miss must not touch any catalog counter
    let untouched = entity::prelude::Word::find()
        .filter(entity::word::Column::SearchCount.gt(0))
        .count(db)
        .await?;
    assert_eq!(untouched, 0);

    Ok(())
}

/// Tests a miss in both catalog and ledger.
///
/// The search still lands in the lookups log.
///
/// Expected: Err NotFound with the lookup recorded
#[tokio::test]
async fn search_miss_is_not_found_but_logged() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dictionary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = WordService::new(db).search("zookeeper", "203.0.113.9").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::Lookup::find().count(db).await?, 1);

    Ok(())
}

/// Tests that the recently-added feed is capped at three, newest first.
///
/// Expected: Ok with the three newest terms
#[tokio::test]
async fn recent_feed_returns_three_newest() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dictionary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = chrono::Utc::now();
    for (i, term) in ["first", "second", "third", "fourth"].iter().enumerate() {
        factory::word::WordFactory::new(db)
            .term(*term)
            .added_at(now - chrono::Duration::minutes(10 - i as i64))
            .build()
            .await?;
    }

    let recent = WordService::new(db).recent().await?;

    let terms: Vec<_> = recent.iter().map(|w| w.term.as_str()).collect();
    assert_eq!(terms, vec!["fourth", "third", "second"]);

    Ok(())
}
