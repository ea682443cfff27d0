use std::path::Path;

use chrono::Local;
use tokio::{fs::File, io::AsyncWriteExt};

use crate::model::MedicationRecord;
use crate::parse::parse_page;
use crate::request::{PageSource, SiteClient};
use crate::{info_time, Result, EXPECTED_NUM_OF_ENTRIES, FILE_PATH, LETTERS, START_PAGE};

pub async fn process_site() -> Result<()> {
    let start_time = Local::now();
    let client = SiteClient::new()?;

    info_time!("Started scraping");

    let meds = scrape_all(&client).await?;
    info_time!(start_time, "Finished PROCESSING ALL letters.");

    write_medications(FILE_PATH, &meds).await?;

    info_time!(
        "Finished scraping. Total medications collected: {}",
        meds.len()
    );
    info_time!("Data written to {FILE_PATH}");

    Ok(())
}

/// Walks every letter from A to Z, requesting pages until one comes back without a listing table.
/// A page with a table but no rows does not stop the letter, only a missing table does.
/// Returns all the medications in the order they were found.
pub async fn scrape_all<S: PageSource>(source: &S) -> Result<Vec<MedicationRecord>> {
    let mut all_meds = Vec::with_capacity(EXPECTED_NUM_OF_ENTRIES);

    for letter in LETTERS {
        scrape_letter(source, letter, &mut all_meds).await?;
    }

    Ok(all_meds)
}

/// Process all the pages of a single letter, appending to `all_meds`.
async fn scrape_letter<S: PageSource>(
    source: &S,
    letter: char,
    all_meds: &mut Vec<MedicationRecord>,
) -> Result<()> {
    let start_letter_time = Local::now();

    for page in START_PAGE.. {
        info_time!("Scraping letter '{letter}', page {page}...");
        let html = source.fetch_page(letter, page).await?;

        let Some(meds) = parse_page(html).await? else {
            info_time!(
                start_letter_time,
                "No more data for letter '{letter}'. Moving on."
            );
            break;
        };

        all_meds.extend(meds);
        info_time!("Total medications collected so far: {}", all_meds.len());
    }
    Ok(())
}

/// Writes the medications as a pretty printed JSON array, overwriting `path`.
/// Non-ASCII characters are kept as they are.
pub async fn write_medications(path: impl AsRef<Path>, meds: &[MedicationRecord]) -> Result<()> {
    let local_now = Local::now();
    let path = path.as_ref();

    let json = serde_json::to_vec_pretty(meds)?;
    let mut file = File::create(path).await?;
    file.write_all(&json).await?;
    file.flush().await?;

    info_time!(local_now, "Wrote the results to file: {}", path.display());
    Ok(())
}
