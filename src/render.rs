//! HTML fragment builders and placeholder substitution.
//!
//! One render is a pure, single-pass transform: the day data and an
//! immutable template string go in, the finished document comes out. The
//! substitution is an ordered list of `(token, fragment)` pairs applied
//! with plain string replacement. Tokens the template does not contain are
//! skipped, and `{{...}}` text outside the recognized set survives
//! untouched, so partial templates still render.

use crate::data::{AgentUsage, DaySummary, Stat, TimelineItem, Workspace};
use crate::error::ExitError;
use crate::timeline::{
    AxisRange, ItemSpan, MIN_LANE_WIDTH_PCT, format_duration, lane_position, round2,
};

/// Page template compiled into the binary; `--template` swaps it out.
pub const DEFAULT_TEMPLATE: &str = include_str!("templates/daymap.html");

const ARROW: &str = "\u{2192}";
const DOT: &str = "\u{00b7}";

/// Tag text that marks a journal card as covering the whole day.
const SPANNING_TAG: &str = "spanned all day";

/// Render the final document from a day summary and a template string.
pub fn render_document(template: &str, day: &DaySummary) -> Result<String, ExitError> {
    let axis = AxisRange::from_items(&day.timeline)?;
    tracing::debug!(
        axis_start = axis.start,
        axis_end = axis.end,
        items = day.timeline.len(),
        "computed day-map axis"
    );

    let replacements: [(&str, String); 12] = [
        ("{{DATE_LONG}}", day.date_long.clone()),
        ("{{DATE_DISPLAY}}", day.date_display.clone()),
        ("{{HEADLINE}}", day.headline.clone()),
        ("{{SUBTITLE}}", day.subtitle.clone()),
        ("{{STATS_INLINE}}", build_stats(&day.stats)),
        ("{{DAYMAP_LANES}}", build_lanes(&day.timeline, axis)?),
        ("{{DAYMAP_AXIS}}", build_axis(axis)),
        ("{{JOURNAL_ITEMS}}", build_journal(&day.timeline)?),
        ("{{WORKSPACE_ROWS}}", build_workspaces(&day.workspaces)),
        ("{{AGENT_ITEMS}}", build_agents(&day.agents)),
        ("{{HERO_NUMBER}}", day.hero_number.clone()),
        ("{{HERO_LABEL}}", day.hero_label.clone()),
    ];

    let mut html = template.to_string();
    for (token, fragment) in replacements {
        html = html.replace(token, &fragment);
    }
    Ok(html)
}

/// Inline stat strip: entries separated by a middle dot, highlighted
/// values in gold.
fn build_stats(stats: &[Stat]) -> String {
    let mut html = String::new();
    for (i, stat) in stats.iter().enumerate() {
        if i > 0 {
            html.push_str("<span class=\"stat-sep\">&middot;</span>");
        }
        let class = if stat.is_highlight { " class=\"gold\"" } else { "" };
        let unit = if stat.unit.is_empty() {
            String::new()
        } else {
            format!(" {}", stat.unit)
        };
        html.push_str(&format!(
            "<span><strong{class}>{value}</strong>{unit} {label}</span>",
            value = stat.value,
            label = stat.label,
        ));
    }
    html
}

/// One swimlane per item, in input order.
///
/// Callers pre-sort if they want chronological display; lane identity
/// follows the input list.
fn build_lanes(items: &[TimelineItem], axis: AxisRange) -> Result<String, ExitError> {
    let mut html = String::new();
    for (i, item) in items.iter().enumerate() {
        let span = ItemSpan::resolve(item)?;
        let pos = lane_position(span, axis);
        let bar_color = item.color.fill();
        let delay = round2(i as f64 * 0.05);

        // A zero message count renders as no count.
        let tip = match (&item.time_end, item.messages.filter(|&m| m > 0)) {
            (Some(end), Some(msgs)) => format!("{} {ARROW} {} {DOT} {} msgs", item.time, end, msgs),
            (Some(end), None) => format!("{} {ARROW} {}", item.time, end),
            (None, Some(msgs)) => format!("{} {DOT} {} msgs", item.time, msgs),
            (None, None) => item.time.clone(),
        };

        let mut marker = String::new();
        if item.is_commit {
            marker.push_str(" commit-marker");
        }
        if item.is_meeting {
            marker.push_str(" meeting-marker");
        }

        let width_style = if pos.width_pct < MIN_LANE_WIDTH_PCT {
            "min-width:14px".to_string()
        } else {
            format!("width:{}%", pos.width_pct)
        };

        html.push_str(&format!(
            "        <div class=\"lane\">\n\
             \x20         <div class=\"lane-label\" style=\"color:{bar_color}\">{label}</div>\n\
             \x20         <div class=\"lane-track\">\n\
             \x20           <div class=\"lane-bar{marker}\" style=\"left:{left}%;{width_style};background:{bar_color};animation-delay:{delay}s\" data-tip=\"{tip}\"></div>\n\
             \x20         </div>\n\
             \x20       </div>\n",
            label = item.lane_label(),
            left = pos.left_pct,
        ));
    }
    Ok(html)
}

/// Hour ticks from axis start to axis end inclusive.
fn build_axis(axis: AxisRange) -> String {
    let mut html = String::new();
    for hour in axis.start..=axis.end {
        let pct = round2((hour - axis.start) as f64 / axis.span() * 100.0);
        html.push_str(&format!(
            "        <span style=\"left:{pct}%\">{hour:02}</span>\n"
        ));
    }
    html
}

/// Detailed journal cards below the Day Map, same order as the lanes.
fn build_journal(items: &[TimelineItem]) -> Result<String, ExitError> {
    let mut html = String::new();
    for item in items {
        let ev_color = item.color.fill();
        let span_class = if item.tags.iter().any(|t| t.text == SPANNING_TAG) {
            " spanning"
        } else {
            ""
        };

        let span = ItemSpan::resolve(item)?;
        let time_display = match (&item.time_end, span.end) {
            (Some(end), Some(end_h)) => {
                let duration = format_duration(end_h - span.start);
                format!("{} {ARROW} {} {DOT} {}", item.time, end, duration)
            }
            _ => item.time.clone(),
        };

        let msgs_html = match item.messages.filter(|&m| m > 0) {
            Some(msgs) => {
                let highlight = if item.is_commit { " highlight" } else { "" };
                format!("<span class=\"event-msgs{highlight}\">{msgs} msgs</span>")
            }
            None if item.is_commit => {
                "<span class=\"event-msgs highlight\">the commit</span>".to_string()
            }
            None => String::new(),
        };

        let mut tags_html = String::new();
        for tag in &item.tags {
            tags_html.push_str(&format!(
                "          <span class=\"tag\" style=\"color:{color};border-color:{border}\">{text}</span>\n",
                color = tag.color.fill(),
                border = tag.color.border(),
                text = tag.text,
            ));
        }

        html.push_str(&format!(
            "      <article class=\"event{span_class} reveal\" style=\"--ev-color:{ev_color}\">\n\
             \x20       <div class=\"event-meta\">\n\
             \x20         <time class=\"event-time\">{time_display}</time>\n\
             \x20         {msgs_html}\n\
             \x20       </div>\n\
             \x20       <h3 class=\"event-title\">{title}</h3>\n\
             \x20       <p class=\"event-desc\">{description}</p>\n\
             \x20       <div class=\"event-tags\">\n\
             {tags_html}        </div>\n\
             \x20     </article>\n",
            title = item.title,
            description = item.description,
        ));
    }
    Ok(html)
}

/// Workspace distribution rows with gradient fill bars.
fn build_workspaces(workspaces: &[Workspace]) -> String {
    let mut html = String::new();
    for ws in workspaces {
        let color = ws.color.fill();
        let dim = ws.color_dim.fill();
        html.push_str(&format!(
            "      <div class=\"ws-row\">\n\
             \x20       <span class=\"ws-label\">{name}</span>\n\
             \x20       <div class=\"ws-track\"><div class=\"ws-fill\" style=\"width:{percent}%;background:linear-gradient(90deg,{color},{dim})\"></div></div>\n\
             \x20       <span class=\"ws-num\">{count}</span>\n\
             \x20     </div>\n",
            name = ws.name,
            percent = ws.percent,
            count = ws.count,
        ));
    }
    html
}

fn build_agents(agents: &[AgentUsage]) -> String {
    let mut html = String::new();
    for agent in agents {
        html.push_str(&format!(
            "      <div class=\"agent-item\">\n\
             \x20       <span class=\"agent-glyph\">{icon}</span>\n\
             \x20       <span class=\"agent-name\">{name}</span>\n\
             \x20       <span class=\"agent-val\">{count}</span>\n\
             \x20       <span class=\"agent-unit\">{label}</span>\n\
             \x20     </div>\n",
            icon = agent.icon,
            name = agent.name,
            count = agent.count,
            label = agent.label,
        ));
    }
    html
}
