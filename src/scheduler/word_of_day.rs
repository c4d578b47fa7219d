use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{data::word::WordRepository, error::AppError, state::WordOfDayCache};

/// Starts the word-of-the-day scheduler.
///
/// A daily job at midnight picks a random catalog entry into the shared
/// cache. The cache is advisory: it stays empty until the first firing, and
/// readers treat an empty cache as a miss. The job is the cache's only
/// writer.
///
/// # Arguments
/// - `db`: Database connection
/// - `cache`: Shared cache the refreshed value is written into
pub async fn start_scheduler(
    db: DatabaseConnection,
    cache: WordOfDayCache,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();
    let job_cache = cache.clone();

    // Schedule job to run daily at midnight
    let job = Job::new_async("0 0 0 * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let cache = job_cache.clone();

        Box::pin(async move {
            if let Err(e) = refresh_word_of_day(&db, &cache).await {
                tracing::error!("Error refreshing word of the day: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Word of the day scheduler started");

    Ok(())
}

/// Picks a random catalog entry and publishes it to the cache.
///
/// An empty catalog leaves the previous value in place.
pub async fn refresh_word_of_day(
    db: &DatabaseConnection,
    cache: &WordOfDayCache,
) -> Result<(), AppError> {
    let Some(word) = WordRepository::new(db).random().await? else {
        tracing::warn!("No words available for word of the day");
        return Ok(());
    };

    tracing::info!("Word of the day updated: {}", word.term);

    *cache.write().await = Some(word);

    Ok(())
}
