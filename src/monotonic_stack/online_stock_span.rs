//! Online Stock Span: consecutive days (ending today) with price <= today's.
//!
//! The stack holds (price, span) pairs with strictly decreasing prices;
//! a new price absorbs the spans of every popped smaller-or-equal entry.

pub struct StockSpanner {
    /// (price, span) pairs, prices strictly decreasing bottom to top.
    stack: Vec<(i64, u32)>,
}

impl StockSpanner {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn next(&mut self, price: i64) -> u32 {
        let mut span = 1;
        while let Some(&(top_price, top_span)) = self.stack.last() {
            if top_price > price {
                break;
            }
            span += top_span;
            self.stack.pop();
        }
        self.stack.push((price, span));
        span
    }
}

impl Default for StockSpanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_sequence() {
        let mut spanner = StockSpanner::new();
        let spans: Vec<u32> = [100, 80, 60, 70, 60, 75, 85]
            .iter()
            .map(|&p| spanner.next(p))
            .collect();
        assert_eq!(spans, vec![1, 1, 1, 2, 1, 4, 6]);
    }

    #[test]
    fn strictly_increasing_prices() {
        let mut spanner = StockSpanner::new();
        let spans: Vec<u32> = [10, 20, 30].iter().map(|&p| spanner.next(p)).collect();
        assert_eq!(spans, vec![1, 2, 3]);
    }

    #[test]
    fn equal_prices_extend_the_span() {
        let mut spanner = StockSpanner::new();
        let spans: Vec<u32> = [50, 50, 50].iter().map(|&p| spanner.next(p)).collect();
        assert_eq!(spans, vec![1, 2, 3]);
    }
}
