//! Feed renderer
//!
//! Builds presentational trees for hero, ticker items and cards, and renders
//! the full homepage from a populated [`Document`].

use super::document::Document;
use super::node::{Element, Node};
use super::surface::{GridKind, Target};
use crate::app::DisplayAttributes;
use crate::domain::entities::{FeedItem, Section};

/// Client glue for the live page session: replays patches pushed over `/live`
/// and forwards tab clicks. The page's own query (`?tab=`) is passed on so the
/// session opens on the tab the page was rendered with.
const LIVE_SCRIPT: &str = r#"(function(){
  var ws = new WebSocket((location.protocol === "https:" ? "wss://" : "ws://") + location.host + "/live" + location.search);
  function node(id){ return document.getElementById(id); }
  ws.onmessage = function(ev){
    JSON.parse(ev.data).forEach(function(p){
      var el = node(p.target); if (!el) return;
      if (p.op === "clear") el.innerHTML = "";
      else if (p.op === "append") el.insertAdjacentHTML("beforeend", p.html);
      else if (p.op === "text") el.textContent = p.text;
      else if (p.op === "visible") el.hidden = !p.visible;
      else if (p.op === "active") el.classList.toggle("is-active", p.active);
      else if (p.op === "fade") el.classList.toggle("is-fading", !p.shown);
    });
  };
  document.querySelectorAll("[data-tab]").forEach(function(btn){
    btn.addEventListener("click", function(){ ws.send(JSON.stringify({tab: btn.dataset.tab})); });
  });
})();"#;

/// Hero display for the current pool item
pub fn hero_node(item: &FeedItem, attrs: &DisplayAttributes) -> Node {
    let media = item.image.as_ref().map(|src| {
        Element::new("figure")
            .class("hero__media")
            .child(
                Element::new("img")
                    .attr("src", src.as_str())
                    .attr("alt", item.title.as_str()),
            )
            .maybe_child(
                item.image_credit
                    .as_ref()
                    .map(|credit| Element::new("figcaption").text(credit.as_str())),
            )
    });

    Element::new("div")
        .class("hero__inner")
        .attr("data-id", item.id.as_str())
        .maybe_child(media)
        .maybe_child(breaking_badge(attrs, "hero__badge"))
        .child(
            Element::new("span")
                .class("hero__category")
                .text(attrs.category_label.as_str()),
        )
        .child(Element::new("h1").class("hero__title").text(item.title.as_str()))
        .child(Element::new("p").class("hero__dek").text(item.dek.as_str()))
        .maybe_child(age_node(attrs, "hero__age"))
        .child(
            Element::new("a")
                .class("hero__link")
                .attr("href", item.article_href())
                .text("Read the story →"),
        )
        .into()
}

/// One entry of the ticker track
pub fn ticker_item_node(item: &FeedItem, attrs: &DisplayAttributes) -> Node {
    Element::new("div")
        .class("ticker__item")
        .attr("data-id", item.id.as_str())
        .child(
            Element::new("span")
                .class("ticker__pill")
                .text(format!("{} • {}", attrs.type_label, attrs.category_label)),
        )
        .child(
            Element::new("a")
                .class("ticker__link")
                .attr("href", item.article_href())
                .text(item.title.as_str()),
        )
        .into()
}

/// A grid card
pub fn card_node(item: &FeedItem, attrs: &DisplayAttributes) -> Node {
    let type_class = if item.is_meme() {
        "pill pill--meme"
    } else {
        "pill"
    };

    let meta = Element::new("div")
        .class("card__meta")
        .child(
            Element::new("span")
                .class(type_class)
                .text(attrs.type_label.as_str()),
        )
        .child(
            Element::new("span")
                .class("pill pill--muted")
                .text(attrs.category_label.as_str()),
        )
        .maybe_child(breaking_badge(attrs, "pill pill--breaking"))
        .maybe_child(age_node(attrs, "card__age"));

    Element::new("div")
        .class("card")
        .attr("data-id", item.id.as_str())
        .maybe_child(item.image.as_ref().map(|src| {
            Element::new("img")
                .class("card__image")
                .attr("src", src.as_str())
                .attr("alt", item.title.as_str())
        }))
        .child(meta)
        .child(Element::new("h3").class("card__title").text(item.title.as_str()))
        .child(Element::new("p").class("card__dek").text(item.dek.as_str()))
        .child(
            Element::new("a")
                .class("card__link")
                .attr("href", item.article_href())
                .text("Open story →"),
        )
        .into()
}

fn breaking_badge(attrs: &DisplayAttributes, class: &str) -> Option<Element> {
    attrs
        .is_breaking
        .then(|| Element::new("span").class(class.to_string()).text("BREAKING"))
}

fn age_node(attrs: &DisplayAttributes, class: &str) -> Option<Element> {
    (!attrs.age_label.is_empty()).then(|| {
        Element::new("span")
            .class(class.to_string())
            .text(attrs.age_label.as_str())
    })
}

/// Container element holding the current children of `target`
fn container(doc: &Document, tag: &'static str, class: &str, target: Target) -> Element {
    let mut el = Element::new(tag)
        .class(class.to_string())
        .attr("id", target.element_id());
    if !doc.is_visible(target) {
        el = el.attr("hidden", "hidden");
    }
    if let Some(text) = doc.text(target) {
        el = el.text(text);
    }
    doc.children(target)
        .iter()
        .cloned()
        .fold(el, |el, child| el.child(child))
}

fn tab_bar(doc: &Document) -> Element {
    Section::ALL.iter().fold(
        Element::new("nav").class("tabs"),
        |nav, section| {
            let target = Target::Tab(*section);
            let class = if doc.is_active(target) {
                "tab is-active"
            } else {
                "tab"
            };
            nav.child(
                Element::new("button")
                    .class(class)
                    .attr("id", target.element_id())
                    .attr("data-tab", section.as_str())
                    .text(section.display_name()),
            )
        },
    )
}

fn grid_section(doc: &Document, grid: GridKind) -> Element {
    let mut section = Element::new("section")
        .class("news-section")
        .attr("id", format!("{}Section", grid.key()))
        .child(Element::new("h2").class("section__title").text(grid.heading()));
    if grid == GridKind::Latest {
        section = section.child(tab_bar(doc));
    }
    section
        .child(container(doc, "div", "grid", Target::Grid(grid)))
        .child(
            container(doc, "p", "empty-state", Target::EmptyState(grid))
                .text("Nothing here yet. Check back soon."),
        )
}

/// Render the complete homepage
pub fn render_page(doc: &Document) -> String {
    let main = GridKind::ALL.iter().fold(
        Element::new("main")
            .class("page")
            .child(container(doc, "section", "hero", Target::Hero))
            .child(
                Element::new("div")
                    .class("ticker")
                    .child(container(doc, "div", "ticker__track", Target::TickerTrack)),
            ),
        |main, grid| main.child(grid_section(doc, *grid)),
    );

    let header = Element::new("header")
        .class("masthead")
        .child(Element::new("h1").class("brand").text("IriLine Collective"))
        .child(Element::new("p").class("motto").text("Context, not copies."));
    let footer = Element::new("footer").class("footer").text("© ").child(container(
        doc,
        "span",
        "footer__year",
        Target::FooterYear,
    ));

    let mut buf = String::new();
    buf.push_str("<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">");
    buf.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    buf.push_str("<title>IriLine Collective</title>");
    buf.push_str("<link rel=\"stylesheet\" href=\"styles.css\"></head><body>");
    for part in [header, main, footer] {
        Node::from(part).write_html(&mut buf);
    }
    // script bodies are raw text, not escaped
    buf.push_str("<script>");
    buf.push_str(LIVE_SCRIPT);
    buf.push_str("</script></body>");
    buf.push_str("</html>\n");
    buf
}
