//! View models consumed by page rendering
//!
//! Pure transformations from entity rows (and joined show rows) into the
//! nested structures each page displays. Nothing here touches the database.

mod detail;
mod genres;
mod listing;

pub use detail::{
    build_artist_detail, build_venue_detail, partition_shows, ArtistDetail, ArtistAppearance,
    ShowPartition, VenueAppearance, VenueDetail,
};
pub use genres::{encode_genres, parse_genres};
pub use listing::{
    build_artist_listing, build_show_listing, group_venues_by_location, ArtistListItem,
    EntitySummary, SearchResults, ShowListItem, VenueArea,
};
