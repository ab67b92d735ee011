//! Text rendering of the page.
//!
//! Mirrors the regions of the browser page: title, connected account,
//! dataset selector, selected-dataset detail, the two action triggers,
//! then status and token when there is something to show.

use std::fmt;

use crate::controller::state::ViewState;

pub const TITLE: &str = "Medical Data Access System";
pub const PLACEHOLDER: &str = "-- Select Dataset --";

/// A borrowed view of the state, ready to print.
pub struct Page<'a> {
    state: &'a ViewState,
    currency: &'a str,
}

impl<'a> Page<'a> {
    pub fn new(state: &'a ViewState, currency: &'a str) -> Self {
        Self { state, currency }
    }
}

impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        let selected_id = state.selected.as_ref().map(|d| d.id);

        writeln!(f, "{}", TITLE)?;
        match state.account {
            Some(account) => writeln!(f, "Connected Account: {}", account)?,
            None => writeln!(f, "Connected Account:")?,
        }
        writeln!(f)?;

        writeln!(f, "Select a Dataset")?;
        let mark = |on: bool| if on { "(*)" } else { "( )" };
        writeln!(f, "  {} {}", mark(selected_id.is_none()), PLACEHOLDER)?;
        for dataset in &state.datasets {
            writeln!(
                f,
                "  {} [{}] {}",
                mark(selected_id == Some(dataset.id)),
                dataset.id,
                dataset.label(self.currency)
            )?;
        }

        if let Some(dataset) = &state.selected {
            writeln!(f)?;
            writeln!(f, "{}", dataset.name)?;
            writeln!(f, "Price: {} {} per day", dataset.price, self.currency)?;
        }

        writeln!(f)?;
        writeln!(f, "[ Request Access ]  [ Check Access ]")?;

        if let Some(status) = state.access_status {
            writeln!(f)?;
            writeln!(f, "Access Status: {}", status)?;
        }
        if let Some(token) = state.visible_token() {
            writeln!(f, "Your Access Token: {}", token)?;
        }
        Ok(())
    }
}

/// Render the whole page to a string.
pub fn render_page(state: &ViewState, currency: &str) -> String {
    Page::new(state, currency).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::state::{AccessStatus, Dataset};
    use alloy::primitives::{Address, TxHash};

    fn listing(id: u64, name: &str, price: &str) -> Dataset {
        Dataset {
            id,
            name: name.to_string(),
            url: format!("https://data.example/{}", id),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_empty_page() {
        let page = render_page(&ViewState::default(), "ETH");
        assert!(page.starts_with(TITLE));
        assert!(page.contains("Connected Account:\n"));
        assert!(page.contains("(*) -- Select Dataset --"));
        assert!(page.contains("[ Request Access ]  [ Check Access ]"));
        assert!(!page.contains("Access Status"));
        assert!(!page.contains("per day"));
    }

    #[test]
    fn test_selection_and_detail() {
        let b = listing(2, "Oncology", "0.5");
        let state = ViewState {
            account: Some(Address::repeat_byte(0x11)),
            datasets: vec![listing(1, "Cardiology", "0.01"), b.clone()],
            selected: Some(b),
            ..ViewState::default()
        };
        let page = render_page(&state, "ETH");

        assert!(page.contains("( ) [1] Cardiology (0.01 ETH)"));
        assert!(page.contains("(*) [2] Oncology (0.5 ETH)"));
        assert!(page.contains("( ) -- Select Dataset --"));
        assert!(page.contains("\nOncology\nPrice: 0.5 ETH per day\n"));
        // URLs are stored but never shown
        assert!(!page.contains("data.example"));
    }

    #[test]
    fn test_token_only_when_granted() {
        let mut state = ViewState {
            access_status: Some(AccessStatus::Denied),
            access_token: Some(TxHash::repeat_byte(0xab)),
            ..ViewState::default()
        };
        let page = render_page(&state, "ETH");
        assert!(page.contains("Access Status: Access Denied"));
        assert!(!page.contains("Your Access Token"));

        state.access_status = Some(AccessStatus::Granted);
        let page = render_page(&state, "ETH");
        assert!(page.contains("Access Status: Access Granted"));
        assert!(page.contains(&format!("Your Access Token: {}", TxHash::repeat_byte(0xab))));
    }
}
