//! Use-case inputs, decoupled from any wire format.

/// Command: create a product.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductCommand {
    pub name: String,
    pub price: f64,
}

impl CreateProductCommand {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Command: update a product. `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProductCommand {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl UpdateProductCommand {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            price: None,
        }
    }

    pub fn price(price: f64) -> Self {
        Self {
            name: None,
            price: Some(price),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}
