//! Ranking and view formatting.
//!
//! Pure transformations from a [`Snapshot`](crate::snapshot::Snapshot) to
//! display text. Nothing here performs I/O or reads the clock: the caller
//! passes `now` for relative timestamps.
//!
//! - [`rank`]: stable score-descending ordering, bounded to `[1, 25]`
//! - [`render_board`]: embed with header and top ten
//! - [`render_top_n`]: plain ranking lines
//! - [`render_server_info`]: name, map, player count, update time

mod embed;
mod rank;
mod time;
mod view;

pub use embed::{Embed, EmbedField};
pub use rank::{
    DEFAULT_TOP_N, MAX_TOP_N, MIN_TOP_N, RankedEntry, RankedView, clamp_top_n, rank,
};
pub use time::relative_time;
pub use view::{
    DEFAULT_MAP_NAME, DEFAULT_SERVER_NAME, NO_PLAYERS, format_entry, render_board,
    render_server_info, render_top_n,
};
