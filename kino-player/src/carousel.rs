//! Scroll state for the Top Picks carousel.

use iced::widget::scrollable;
use iced::widget::scrollable::Id as ScrollableId;

/// Poster width inside one Top Picks card.
pub const POSTER_WIDTH: f32 = 160.0;
/// Padding the card container wraps around its contents.
pub const CARD_PADDING: f32 = 4.0;
/// Full rendered width of one card, padding included. Arrow paging steps
/// in multiples of this, so it must match what the view lays out.
pub const ITEM_WIDTH: f32 = POSTER_WIDTH + 2.0 * CARD_PADDING;
/// Horizontal gap between cards in the strip.
pub const ITEM_SPACING: f32 = 15.0;

/// State for the horizontally scrolling film strip.
#[derive(Debug, Clone)]
pub struct CarouselState {
    /// Scrollable widget ID for programmatic scrolling
    pub scrollable_id: ScrollableId,
    /// Current scroll position in pixels
    pub scroll_position: f32,
    /// Maximum scroll position (content width - viewport width)
    pub max_scroll: f32,
    /// Number of items scrolled per arrow press
    pub items_per_page: usize,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            scrollable_id: ScrollableId::unique(),
            scroll_position: 0.0,
            max_scroll: f32::MAX,
            items_per_page: 4,
        }
    }
}

impl CarouselState {
    pub fn can_go_left(&self) -> bool {
        self.scroll_position > 0.0
    }

    pub fn can_go_right(&self) -> bool {
        self.scroll_position < self.max_scroll
    }

    pub fn go_left(&mut self) {
        let step = self.items_per_page as f32 * (ITEM_WIDTH + ITEM_SPACING);
        self.scroll_position = (self.scroll_position - step).max(0.0);
    }

    pub fn go_right(&mut self) {
        let step = self.items_per_page as f32 * (ITEM_WIDTH + ITEM_SPACING);
        // Clamped against max_scroll once the next viewport report arrives.
        self.scroll_position = (self.scroll_position + step).min(self.max_scroll);
    }

    /// Track a user-driven scroll so the arrow buttons stay in sync.
    pub fn record_viewport(&mut self, viewport: &scrollable::Viewport) {
        self.scroll_position = viewport.absolute_offset().x;
        let bounds = viewport.bounds();
        let content = viewport.content_bounds();
        self.max_scroll = (content.width - bounds.width).max(0.0);
    }

    pub fn scroll_offset(&self) -> scrollable::AbsoluteOffset {
        scrollable::AbsoluteOffset {
            x: self.scroll_position,
            y: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_is_clamped_at_zero() {
        let mut state = CarouselState::default();
        assert!(!state.can_go_left());
        state.go_right();
        state.go_left();
        state.go_left();
        assert_eq!(state.scroll_position, 0.0);
    }

    #[test]
    fn arrow_step_covers_whole_padded_cards() {
        let mut state = CarouselState {
            max_scroll: 10_000.0,
            ..CarouselState::default()
        };
        state.go_right();
        assert_eq!(
            state.scroll_position,
            4.0 * (POSTER_WIDTH + 2.0 * CARD_PADDING + ITEM_SPACING)
        );
    }

    #[test]
    fn right_is_clamped_at_max() {
        let mut state = CarouselState {
            max_scroll: 300.0,
            ..CarouselState::default()
        };
        state.go_right();
        assert_eq!(state.scroll_position, 300.0);
        assert!(!state.can_go_right());
    }
}
