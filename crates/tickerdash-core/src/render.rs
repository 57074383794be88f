//! Presentation of dashboard state.
//!
//! [`render`] is a pure function of the [`Dashboard`], the injected
//! [`EarningsCalendar`] and the current date. The resulting [`DashboardView`]
//! can be emitted as markup fragments or as plain-text rows, or serialized.

use std::fmt::Write as _;

use serde::Serialize;
use time::macros::format_description;
use time::Date;

use crate::batch::SeriesResult;
use crate::dashboard::Dashboard;
use crate::domain::format_iso_date;
use crate::{
    get_ticker_snapshot, pick_range_points, EarningsCalendar, EarningsEvent, RangeSelection,
    Snapshot, Tab, ThemePreference, Trend,
};

pub const LOADING_STATUS: &str = "Loading stock data...";
pub const DATA_UNAVAILABLE: &str = "Data unavailable";

/// One result card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardView {
    Quote {
        ticker: String,
        #[serde(flatten)]
        snapshot: Snapshot,
    },
    Message {
        ticker: String,
        message: String,
    },
}

impl CardView {
    pub fn ticker(&self) -> &str {
        match self {
            Self::Quote { ticker, .. } | Self::Message { ticker, .. } => ticker,
        }
    }
}

/// One earnings list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub ticker: String,
    pub company: String,
    pub date: String,
    pub date_label: String,
    pub time: String,
}

impl From<&EarningsEvent> for NewsItem {
    fn from(event: &EarningsEvent) -> Self {
        Self {
            ticker: event.ticker.clone(),
            company: event.company.clone(),
            date: format_iso_date(event.date),
            date_label: date_label(event.date),
            time: event.time.clone(),
        }
    }
}

/// Everything the UI surface shows for the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub theme: ThemePreference,
    pub theme_toggle_label: &'static str,
    pub tab: Tab,
    pub range: RangeSelection,
    pub controls_disabled: bool,
    pub status: String,
    pub cards: Vec<CardView>,
    pub news: Vec<NewsItem>,
}

pub fn render(dashboard: &Dashboard, calendar: &EarningsCalendar, today: Date) -> DashboardView {
    DashboardView {
        theme: dashboard.theme(),
        theme_toggle_label: dashboard.theme().toggle_label(),
        tab: dashboard.tab(),
        range: dashboard.range(),
        controls_disabled: dashboard.controls_disabled(),
        status: status_line(dashboard),
        cards: render_cards(dashboard),
        news: render_news(calendar, today),
    }
}

/// Cards for the active tickers, in submission order.
pub fn render_cards(dashboard: &Dashboard) -> Vec<CardView> {
    dashboard
        .tickers()
        .iter()
        .map(|ticker| {
            let ticker_name = ticker.as_str().to_owned();
            match dashboard.result(ticker) {
                Some(SeriesResult::Success { points }) => {
                    let slice = pick_range_points(points, dashboard.range());
                    match get_ticker_snapshot(&slice) {
                        Some(snapshot) => CardView::Quote {
                            ticker: ticker_name,
                            snapshot,
                        },
                        None => message_card(ticker_name, DATA_UNAVAILABLE),
                    }
                }
                Some(SeriesResult::Failure { message }) => message_card(ticker_name, message),
                None => message_card(ticker_name, DATA_UNAVAILABLE),
            }
        })
        .collect()
}

pub fn render_news(calendar: &EarningsCalendar, today: Date) -> Vec<NewsItem> {
    calendar.upcoming(today).into_iter().map(NewsItem::from).collect()
}

pub fn status_line(dashboard: &Dashboard) -> String {
    if dashboard.is_loading() {
        return String::from(LOADING_STATUS);
    }
    if let Some(notice) = dashboard.notice() {
        return notice.to_owned();
    }

    let count = dashboard.tickers().len();
    if count == 0 {
        return String::new();
    }

    format!(
        "Showing {} performance for {count} ticker{}.",
        dashboard.range().as_str().to_uppercase(),
        if count > 1 { "s" } else { "" }
    )
}

fn message_card(ticker: String, message: impl Into<String>) -> CardView {
    CardView::Message {
        ticker,
        message: message.into(),
    }
}

/// CSS class for a trend.
pub const fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "up",
        Trend::Down => "down",
        Trend::Flat => "neutral",
    }
}

pub const fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
        Trend::Flat => "•",
    }
}

/// US-dollar amount with thousands separators and two decimals.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return format!("${value}");
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Change line: arrow, signed dollar delta and signed percent.
pub fn change_label(snapshot: &Snapshot) -> String {
    let sign = if snapshot.delta > 0.0 { "+" } else { "" };
    format!(
        "{} {sign}{} ({sign}{:.2}%)",
        trend_arrow(snapshot.trend),
        format_usd(snapshot.delta),
        snapshot.percent_delta
    )
}

fn date_label(date: Date) -> String {
    date.format(format_description!(
        "[month repr:short] [day padding:none], [year]"
    ))
    .unwrap_or_else(|_| format_iso_date(date))
}

fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl CardView {
    pub fn to_markup(&self) -> String {
        match self {
            Self::Message { ticker, message } => format!(
                "<article class=\"result-card\"><h3 class=\"result-symbol\">{}</h3><p class=\"result-change down\">{}</p></article>",
                escape(ticker),
                escape(message)
            ),
            Self::Quote { ticker, snapshot } => {
                let class = trend_class(snapshot.trend);
                format!(
                    "<article class=\"result-card\">\n  <h3 class=\"result-symbol\">{}</h3>\n  <p class=\"result-price {class}\">{}</p>\n  <p class=\"result-change {class}\">{}</p>\n</article>",
                    escape(ticker),
                    format_usd(snapshot.last_price),
                    change_label(snapshot)
                )
            }
        }
    }
}

impl NewsItem {
    pub fn to_markup(&self) -> String {
        format!(
            "<li class=\"news-item\"><span class=\"news-ticker\">{}</span> <span class=\"news-company\">{}</span> <time datetime=\"{}\">{}</time> <span class=\"news-time\">{}</span></li>",
            escape(&self.ticker),
            escape(&self.company),
            self.date,
            escape(&self.date_label),
            escape(&self.time)
        )
    }
}

impl DashboardView {
    /// Full document fragment: theme control, status, both panels with the
    /// inactive one hidden.
    pub fn to_markup(&self) -> String {
        let hidden = |tab: Tab| if self.tab == tab { "" } else { " hidden" };
        let disabled = if self.controls_disabled { " disabled" } else { "" };

        let mut out = String::new();
        let _ = writeln!(
            out,
            "<main data-theme=\"{}\" data-range=\"{}\">",
            self.theme, self.range
        );
        let _ = writeln!(
            out,
            "<button id=\"theme-toggle\">{}</button>",
            self.theme_toggle_label
        );
        let _ = writeln!(out, "<section id=\"tracker\"{}>", hidden(Tab::Tracker));
        let _ = writeln!(out, "<button type=\"submit\"{disabled}>Track</button>");
        let _ = writeln!(out, "<p id=\"status\">{}</p>", escape(&self.status));
        let _ = writeln!(out, "<div id=\"results\">");
        for card in &self.cards {
            let _ = writeln!(out, "{}", card.to_markup());
        }
        let _ = writeln!(out, "</div>");
        let _ = writeln!(out, "</section>");
        let _ = writeln!(out, "<section id=\"news\"{}>", hidden(Tab::News));
        let _ = writeln!(out, "<ul id=\"news-list\">");
        for item in &self.news {
            let _ = writeln!(out, "{}", item.to_markup());
        }
        let _ = writeln!(out, "</ul>");
        let _ = writeln!(out, "</section>");
        out.push_str("</main>");
        out
    }

    /// Plain-text rendering of the visible panel.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        match self.tab {
            Tab::Tracker => {
                let width = self
                    .cards
                    .iter()
                    .map(|card| card.ticker().chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(6);
                for card in &self.cards {
                    match card {
                        CardView::Quote { ticker, snapshot } => {
                            let _ = writeln!(
                                out,
                                "{ticker:<width$}  {:>12}  {}",
                                format_usd(snapshot.last_price),
                                change_label(snapshot)
                            );
                        }
                        CardView::Message { ticker, message } => {
                            let _ = writeln!(out, "{ticker:<width$}  {message}");
                        }
                    }
                }
                if !self.status.is_empty() {
                    let _ = writeln!(out, "{}", self.status);
                }
            }
            Tab::News => {
                for item in &self.news {
                    let _ = writeln!(
                        out,
                        "{:<12}  {:<6}  {}  ({})",
                        item.date_label, item.ticker, item.company, item.time
                    );
                }
            }
        }
        out
    }
}
