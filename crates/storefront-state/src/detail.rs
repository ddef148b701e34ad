//! Product detail view.

use chrono::{NaiveDate, Utc};
use futures::future::join;
use serde::Serialize;
use storefront_catalog::selection::{
    promotions, related_products, PROMOTIONS_COUNT, PROMOTIONS_SCAN_LIMIT,
};
use storefront_catalog::{
    render_reviews, DisplayPrice, Product, ProductId, RatingSummary, ReviewDisplay,
};
use storefront_data::{Endpoint, ProductRepository};
use tracing::{debug, error, warn};

use crate::error::{CatalogError, Result};

/// Everything the product page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetailView {
    pub product: Product,
    pub price: DisplayPrice,
    pub rating: RatingSummary,
    pub reviews: Vec<ReviewDisplay>,
    /// Main gallery images.
    pub gallery: Vec<String>,
    /// Thumbnail strip; empty unless the gallery has more than one image.
    pub thumbnails: Vec<String>,
    pub brand: String,
    pub category: String,
    /// Shown only when in stock.
    pub stock: Option<u32>,
    /// Same-category products, excluding this one.
    pub related: Vec<Product>,
    /// Discounted products from the head of the listing.
    pub promotions: Vec<Product>,
}

impl ProductDetailView {
    /// Derive the view from a product and its enrichment lists.
    /// `rendered_on` replaces missing review dates.
    pub fn assemble(
        product: Product,
        related: Vec<Product>,
        promotions: Vec<Product>,
        rendered_on: NaiveDate,
    ) -> Self {
        Self {
            price: DisplayPrice::of(&product),
            rating: RatingSummary::of(&product),
            reviews: render_reviews(&product.reviews, rendered_on),
            gallery: owned(product.gallery()),
            thumbnails: owned(product.gallery_thumbnails()),
            brand: product.brand_label().to_string(),
            category: product.category_label().to_string(),
            stock: product.visible_stock(),
            related,
            promotions,
            product,
        }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn has_related(&self) -> bool {
        !self.related.is_empty()
    }
}

fn owned(images: Vec<&str>) -> Vec<String> {
    images.into_iter().map(str::to_string).collect()
}

/// Load a product page.
///
/// The product fetch is fatal on failure. Related items and promotions are
/// fetched concurrently afterwards; either one failing leaves that section
/// empty.
pub async fn load_detail<R>(repository: &R, id: ProductId) -> Result<ProductDetailView>
where
    R: ProductRepository + ?Sized,
{
    load_detail_on(repository, id, Utc::now().date_naive()).await
}

/// [`load_detail`] with an explicit fallback date for reviews.
pub async fn load_detail_on<R>(
    repository: &R,
    id: ProductId,
    rendered_on: NaiveDate,
) -> Result<ProductDetailView>
where
    R: ProductRepository + ?Sized,
{
    let product = repository.product(id).await.map_err(|e| {
        error!(endpoint = %Endpoint::Detail, product_id = %id, error = %e, "failed to load product");
        CatalogError::from_detail_fetch(id, e)
    })?;

    let related = async {
        if product.category.is_empty() {
            return Vec::new();
        }
        match repository.category(&product.category).await {
            Ok(list) => related_products(list.products, id),
            Err(e) => {
                warn!(
                    endpoint = %Endpoint::Category,
                    product_id = %id,
                    category = %product.category,
                    error = %e,
                    "related items unavailable"
                );
                Vec::new()
            }
        }
    };

    let promoted = async {
        match repository.list_page(PROMOTIONS_SCAN_LIMIT, 0).await {
            Ok(page) => promotions(page.products, id, PROMOTIONS_COUNT),
            Err(e) => {
                warn!(endpoint = %Endpoint::List, product_id = %id, error = %e, "promotions unavailable");
                Vec::new()
            }
        }
    };

    let (related, promoted) = join(related, promoted).await;
    debug!(
        product_id = %id,
        related = related.len(),
        promotions = promoted.len(),
        "product detail loaded"
    );

    Ok(ProductDetailView::assemble(
        product,
        related,
        promoted,
        rendered_on,
    ))
}
