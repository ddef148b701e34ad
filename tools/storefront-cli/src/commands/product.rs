//! Product detail command.

use anyhow::{Context as _, Result};
use console::style;
use serde::Serialize;
use storefront_catalog::{cards, ProductCard, ProductId};
use storefront_data::ProductRepository;
use storefront_state::carousel::{CARD_GAP, CARD_WIDTH};
use storefront_state::{
    load_detail, CarouselFlags, CarouselLayout, CarouselNavigator, ProductDetailView,
    ScrollDirection,
};

use super::ProductArgs;
use crate::context::Context;
use crate::output::{percentage_bar, price_label, stars};

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    show(&client, args.id, args.scroll, ctx).await
}

/// Detail view plus strip state, as printed in JSON mode.
#[derive(Serialize)]
struct DetailOutput<'a> {
    #[serde(flatten)]
    view: &'a ProductDetailView,
    carousel: Option<CarouselFlags>,
    related_cards: Vec<ProductCard>,
    promotion_cards: Vec<ProductCard>,
}

/// Load and print a product page.
pub async fn show<R>(repository: &R, id: ProductId, scroll: usize, ctx: &Context) -> Result<()>
where
    R: ProductRepository,
{
    let spinner = ctx.output.spinner(&format!("Loading product {}...", id));
    let result = load_detail(repository, id).await;
    spinner.finish_and_clear();
    let view = result.with_context(|| format!("Could not open product {}", id))?;

    let display = &ctx.config.display;
    let layout = CarouselLayout::new(view.related.len(), display.window_width);
    let mut carousel = CarouselNavigator::for_layout(&layout);
    for _ in 0..scroll {
        if !carousel.scroll_by(ScrollDirection::Right) {
            break;
        }
    }

    let related_cards = cards(&view.related, &display.placeholder_image);
    let promotion_cards = cards(&view.promotions, &display.placeholder_image);

    if ctx.output.is_json() {
        ctx.output.json(&DetailOutput {
            view: &view,
            carousel: layout.is_visible().then(|| carousel.flags()),
            related_cards,
            promotion_cards,
        });
        return Ok(());
    }

    print_summary(&view, ctx);
    print_reviews(&view, ctx);

    if layout.is_visible() {
        print_related(&related_cards, &layout, &carousel, ctx);
    }

    if !promotion_cards.is_empty() {
        ctx.output.header("Promotions");
        for card in &promotion_cards {
            ctx.output.card(card, display.currency);
        }
    }

    Ok(())
}

fn print_summary(view: &ProductDetailView, ctx: &Context) {
    let output = &ctx.output;
    output.header(&view.product.title);
    output.kv("id", &view.id().to_string());
    output.kv("brand", &view.brand);
    output.kv("category", &view.category);
    output.kv("price", &price_label(&view.price, ctx.config.display.currency));
    if let Some(stock) = view.stock {
        output.kv("in stock", &stock.to_string());
    }
    output.kv(
        "rating",
        &format!(
            "{} {} ({})",
            stars(view.rating.filled_stars),
            view.rating.average_label(),
            view.rating.review_count_label()
        ),
    );
    if !view.product.description.is_empty() {
        output.line("");
        output.line(&format!("  {}", view.product.description));
    }

    if !view.gallery.is_empty() {
        output.line("");
        output.kv("image", &view.gallery[0]);
        for thumb in &view.thumbnails {
            output.list_item(thumb);
        }
    }
}

fn print_reviews(view: &ProductDetailView, ctx: &Context) {
    let output = &ctx.output;
    output.header("Reviews");

    for (star, count) in view.rating.histogram.rows() {
        output.line(&format!(
            "  {} {} {:>3}",
            star,
            percentage_bar(view.rating.histogram.percentage(star), 20),
            count
        ));
    }

    for review in &view.reviews {
        output.line("");
        output.line(&format!(
            "  {}  {}  {}",
            style(&review.author).bold(),
            stars(review.stars),
            style(&review.date).dim()
        ));
        output.line(&format!("  {}", review.text));
    }
}

fn print_related(
    related: &[ProductCard],
    layout: &CarouselLayout,
    carousel: &CarouselNavigator,
    ctx: &Context,
) {
    let output = &ctx.output;
    let left = if carousel.can_scroll_left() { "◀" } else { " " };
    let right = if carousel.can_scroll_right() { "▶" } else { " " };
    output.header(&format!("Related  {} {}", left, right));

    // Cards whose left edge lies inside the viewport.
    let state = carousel.state();
    let first = (state.scroll_offset / (CARD_WIDTH + CARD_GAP)).floor() as usize;
    for card in related.iter().skip(first).take(layout.visible_cards()) {
        output.card(card, ctx.config.display.currency);
    }
}
