use serde::{Deserialize, Serialize};

use catalog_products::{
    CreateProductCommand, Product, ProductStatus, UpdateProductCommand,
};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
}

impl From<CreateProductRequest> for CreateProductCommand {
    fn from(req: CreateProductRequest) -> Self {
        CreateProductCommand::new(req.name, req.price)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl From<UpdateProductRequest> for UpdateProductCommand {
    fn from(req: UpdateProductRequest) -> Self {
        UpdateProductCommand {
            name: req.name,
            price: req.price,
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub status: ProductStatus,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id_typed().to_string(),
            name: product.name().to_string(),
            price: product.price().amount(),
            status: product.status(),
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse::from(&product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_response_uses_wire_names() {
        let product = Product::create("Widget", 9.99).unwrap();
        let json = serde_json::to_value(ProductResponse::from(&product)).unwrap();
        assert_eq!(json["id"], product.id_typed().to_string());
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["price"], 9.99);
        assert_eq!(json["status"], "ACTIVE");
    }

    #[test]
    fn update_request_fields_are_optional() {
        let req: UpdateProductRequest = serde_json::from_str(r#"{"price": 12.5}"#).unwrap();
        let cmd = UpdateProductCommand::from(req);
        assert_eq!(cmd, UpdateProductCommand::price(12.5));

        let req: UpdateProductRequest = serde_json::from_str("{}").unwrap();
        assert!(UpdateProductCommand::from(req).is_empty());
    }

    #[test]
    fn create_request_maps_to_command() {
        let req: CreateProductRequest =
            serde_json::from_str(r#"{"name": "Widget", "price": 9.99}"#).unwrap();
        assert_eq!(
            CreateProductCommand::from(req),
            CreateProductCommand::new("Widget", 9.99)
        );
    }
}
