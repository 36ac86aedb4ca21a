/// Vertical scroll position of the message log.
///
/// While following, the log is pinned to the bottom whatever its length; any
/// change to the log turns following back on. Scrolling up releases the pin
/// until the view is scrolled back to the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    offset: u16,
    follow: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0,
            follow: true,
        }
    }
}

impl ScrollState {
    pub fn max_offset(total_lines: usize, viewport_height: u16) -> u16 {
        let total = u16::try_from(total_lines).unwrap_or(u16::MAX);
        total.saturating_sub(viewport_height)
    }

    /// Offset to render with, clamped to the content.
    pub fn offset(&self, total_lines: usize, viewport_height: u16) -> u16 {
        let max = Self::max_offset(total_lines, viewport_height);
        if self.follow {
            max
        } else {
            self.offset.min(max)
        }
    }

    pub fn is_following(&self) -> bool {
        self.follow
    }

    pub fn follow_bottom(&mut self) {
        self.follow = true;
    }

    pub fn scroll_up(&mut self, lines: u16, total_lines: usize, viewport_height: u16) {
        let max = Self::max_offset(total_lines, viewport_height);
        self.offset = self
            .offset(total_lines, viewport_height)
            .saturating_sub(lines);
        self.follow = max == 0;
    }

    pub fn scroll_down(&mut self, lines: u16, total_lines: usize, viewport_height: u16) {
        let max = Self::max_offset(total_lines, viewport_height);
        self.offset = self
            .offset(total_lines, viewport_height)
            .saturating_add(lines)
            .min(max);
        self.follow = self.offset >= max;
    }
}
