//! Page templates
//!
//! ```text
//! layout()
//!   ├── index_page()     - every campaign, linked by id
//!   ├── detail_page()    - one campaign with its progress bar
//!   └── not_found_page()
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tailspin_domain::Campaign;

use super::format::{escape_html, format_money};

const SITE_NAME: &str = "Tailspin Toys";

/// Wrap page content in the shared document shell
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} - {SITE_NAME}</title>
  <link rel="stylesheet" href="/static/site.css">
</head>
<body>
  <header><a class="brand" href="/">{SITE_NAME}</a></header>
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = escape_html(title),
    )
}

/// The campaign list
pub fn index_page(campaigns: &[Campaign]) -> String {
    let mut body = String::from("    <h1>Campaigns</h1>\n");

    if campaigns.is_empty() {
        body.push_str("    <p class=\"empty\">No campaigns yet.</p>\n");
        return layout("Campaigns", &body);
    }

    body.push_str("    <ul class=\"campaigns\">\n");
    for campaign in campaigns {
        body.push_str(&format!(
            r#"      <li class="campaign">
        <h2><a href="/campaign?id={id}">{name}</a></h2>
        <p>{description}</p>
        <p class="amounts">{current} raised of {goal}</p>
{progress}      </li>
"#,
            id = campaign.id(),
            name = escape_html(campaign.name()),
            description = escape_html(campaign.description()),
            current = format_money(campaign.current_amount()),
            goal = format_money(campaign.goal_amount()),
            progress = progress_bar(campaign),
        ));
    }
    body.push_str("    </ul>\n");

    layout("Campaigns", &body)
}

/// A single campaign
pub fn detail_page(campaign: &Campaign) -> String {
    let status = if campaign.is_funded() {
        "    <p class=\"funded\">Fully funded!</p>\n"
    } else {
        ""
    };

    let body = format!(
        r#"    <article class="campaign-detail">
      <h1>{name}</h1>
      <p class="description">{description}</p>
      <dl>
        <dt>Goal</dt><dd>{goal}</dd>
        <dt>Raised</dt><dd>{current}</dd>
      </dl>
{progress}{status}      <p><a href="/">Back to all campaigns</a></p>
    </article>
"#,
        name = escape_html(campaign.name()),
        description = escape_html(campaign.description()),
        goal = format_money(campaign.goal_amount()),
        current = format_money(campaign.current_amount()),
        progress = progress_bar(campaign),
    );

    layout(campaign.name(), &body)
}

pub fn not_found_page(path: &str) -> String {
    let body = format!(
        "    <h1>Page not found</h1>\n    <p>Nothing lives at <code>{}</code>.</p>\n    <p><a href=\"/\">See all campaigns</a></p>\n",
        escape_html(path)
    );
    layout("Not found", &body)
}

/// Bar width is clamped to 100%, the label is not
fn progress_bar(campaign: &Campaign) -> String {
    let Some(percent) = campaign.funded_percent() else {
        return String::new();
    };
    let width = percent.min(Decimal::ONE_HUNDRED).to_u32().unwrap_or(0);
    format!(
        "        <div class=\"progress\"><div class=\"bar\" style=\"width: {width}%\"></div></div>\n        <p class=\"percent\">{percent}% funded</p>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailspin_domain::{CampaignId, NewCampaign};

    fn campaign(id: u32, name: &str, goal: i64, current: i64) -> Campaign {
        Campaign::from_new(
            CampaignId::new(id),
            NewCampaign::new(name, Decimal::from(goal), Decimal::from(current))
                .with_description("A toy worth backing"),
        )
    }

    #[test]
    fn test_index_lists_campaigns_with_links() {
        let html = index_page(&[
            campaign(1, "Sky Surfer", 5000, 1200),
            campaign(2, "RoboRacer", 8000, 3500),
        ]);

        assert!(html.contains(r#"<a href="/campaign?id=1">Sky Surfer</a>"#));
        assert!(html.contains(r#"<a href="/campaign?id=2">RoboRacer</a>"#));
        assert!(html.contains("$1,200.00 raised of $5,000.00"));
        assert!(html.contains("24% funded"));
        let sky = html.find("Sky Surfer").unwrap();
        let robo = html.find("RoboRacer").unwrap();
        assert!(sky < robo);
    }

    #[test]
    fn test_index_empty() {
        assert!(index_page(&[]).contains("No campaigns yet."));
    }

    #[test]
    fn test_detail_page() {
        let html = detail_page(&campaign(4, "GitHub Copilot for Kids", 25_000, 25_000));

        assert!(html.contains("<title>GitHub Copilot for Kids - Tailspin Toys</title>"));
        assert!(html.contains("<dd>$25,000.00</dd>"));
        assert!(html.contains("100% funded"));
        assert!(html.contains("Fully funded!"));
    }

    #[test]
    fn test_overfunded_bar_is_clamped() {
        let html = detail_page(&campaign(1, "Kite Kit", 100, 250));
        assert!(html.contains("width: 100%"));
        assert!(html.contains("250% funded"));
    }

    #[test]
    fn test_zero_goal_has_no_bar() {
        let html = detail_page(&campaign(1, "Mystery", 0, 10));
        assert!(!html.contains("class=\"progress\""));
    }

    #[test]
    fn test_campaign_text_is_escaped() {
        let html = detail_page(&campaign(1, "<script>alert(1)</script>", 10, 1));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_not_found_escapes_path() {
        let html = not_found_page("/<oops>");
        assert!(html.contains("/&lt;oops&gt;"));
    }
}
