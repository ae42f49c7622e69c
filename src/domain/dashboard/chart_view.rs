use crate::domain::market_data::{CandlePoint, Pair};

/// Identifies one chart fetch. Issued when a pair is selected; a response is
/// applied only while its token is still the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChartToken(u64);

impl ChartToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Chart modal state machine.
///
/// `Idle -> Loading -> Loaded | Empty -> Idle`. A failed fetch lands in
/// `Empty`, the same as a successful fetch with no points.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ChartView {
    #[default]
    Idle,
    Loading { pair: Pair, token: ChartToken },
    Loaded { pair: Pair, points: Vec<CandlePoint> },
    Empty { pair: Pair },
}

impl ChartView {
    pub fn selected_pair(&self) -> Option<&Pair> {
        match self {
            ChartView::Idle => None,
            ChartView::Loading { pair, .. } | ChartView::Loaded { pair, .. } | ChartView::Empty { pair } => {
                Some(pair)
            }
        }
    }

    pub fn points(&self) -> &[CandlePoint] {
        match self {
            ChartView::Loaded { points, .. } => points,
            _ => &[],
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, ChartView::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ChartView::Loading { .. })
    }

    pub fn pending_token(&self) -> Option<ChartToken> {
        match self {
            ChartView::Loading { token, .. } => Some(*token),
            _ => None,
        }
    }
}

/// Chart slice of the dashboard: the view plus the token sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartState {
    view: ChartView,
    last_token: u64,
}

impl ChartState {
    pub fn view(&self) -> &ChartView {
        &self.view
    }

    /// Drops any series held for the previous pair and starts a new fetch.
    pub(super) fn select(&mut self, pair: Pair) -> ChartToken {
        let token = self.next_token();
        self.view = ChartView::Loading { pair, token };
        token
    }

    /// Applies a fetch result. Stale tokens are ignored.
    pub(super) fn resolve(&mut self, token: ChartToken, points: Vec<CandlePoint>) -> bool {
        let pair = match &self.view {
            ChartView::Loading { pair, token: pending } if *pending == token => pair.clone(),
            _ => return false,
        };
        self.view = if points.is_empty() {
            ChartView::Empty { pair }
        } else {
            ChartView::Loaded { pair, points }
        };
        true
    }

    /// Back to `Idle`. Advances the sequence so in-flight responses are discarded.
    pub(super) fn clear(&mut self) -> bool {
        self.next_token();
        let was_open = self.view.is_open();
        self.view = ChartView::Idle;
        was_open
    }

    fn next_token(&mut self) -> ChartToken {
        self.last_token = self.last_token.wrapping_add(1);
        ChartToken(self.last_token)
    }
}
