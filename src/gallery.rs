//! Gallery pipeline: anchor date → month archive → slide set, plus the
//! optional artwork catalog for the same month.

use crate::archive::{archive_path, artwork_path, fetch_archive, fetch_artwork};
use crate::assemble::{SlideSet, assemble_slides};
use crate::dates::month_key;
use crate::transport::Transport;
use crate::types::ArtworkCatalog;
use chrono::NaiveDate;
use tracing::info;

/// Everything the page needs: the slides and whatever artwork is known for them.
#[derive(Debug, Default)]
pub struct Gallery {
    pub slides: SlideSet,
    pub artwork: ArtworkCatalog,
}

/// Fetch the anchor month's archive and assemble its slides.
///
/// A failed fetch produces an empty set, same as an empty archive.
pub async fn load_slide_set<T>(transport: &T, namespace: &str, anchor: NaiveDate) -> SlideSet
where
    T: Transport + ?Sized,
{
    let path = archive_path(namespace, &month_key(anchor));
    let mut set = SlideSet::default();
    fetch_archive(transport, &path, |posts, total| {
        set = assemble_slides(anchor, total, &posts);
    })
    .await;
    info!(%anchor, slides = set.len(), "slide set ready");
    set
}

/// Slide set plus artwork catalog. The catalog is only requested when there
/// is at least one slide to show it on.
pub async fn load_gallery<T>(transport: &T, namespace: &str, anchor: NaiveDate) -> Gallery
where
    T: Transport + ?Sized,
{
    let slides = load_slide_set(transport, namespace, anchor).await;
    if slides.is_empty() {
        return Gallery::default();
    }
    let artwork = fetch_artwork(transport, &artwork_path(namespace, &month_key(anchor))).await;
    info!(artwork = artwork.len(), "artwork catalog ready");
    Gallery { slides, artwork }
}
