//! Static API documentation metadata served at `/api-docs`.
//!
//! Owned entirely by the HTTP adapter; the domain never sees it.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ApiDocs {
    pub info: ApiInfo,
    pub operations: &'static [Operation],
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiInfo {
    pub title: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub license: License,
}

#[derive(Debug, Clone, Serialize)]
pub struct License {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Operation {
    pub method: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
    pub responses: &'static [u16],
}

const OPERATIONS: &[Operation] = &[
    Operation {
        method: "POST",
        path: "/api/products",
        summary: "Create a new product",
        responses: &[201, 400, 500],
    },
    Operation {
        method: "GET",
        path: "/api/products/{id}",
        summary: "Find a product by id",
        responses: &[200, 400, 404, 500],
    },
    Operation {
        method: "GET",
        path: "/api/products",
        summary: "List all products",
        responses: &[200, 500],
    },
    Operation {
        method: "PUT",
        path: "/api/products/{id}",
        summary: "Update a product's name and/or price",
        responses: &[200, 400, 404, 500],
    },
    Operation {
        method: "DELETE",
        path: "/api/products/{id}",
        summary: "Delete a product",
        responses: &[204, 400, 404, 500],
    },
    Operation {
        method: "PATCH",
        path: "/api/products/{id}/activate",
        summary: "Set a product's status to ACTIVE",
        responses: &[200, 400, 404, 500],
    },
    Operation {
        method: "PATCH",
        path: "/api/products/{id}/deactivate",
        summary: "Set a product's status to INACTIVE",
        responses: &[200, 400, 404, 500],
    },
];

pub fn api_docs() -> ApiDocs {
    ApiDocs {
        info: ApiInfo {
            title: "Product Catalog API",
            version: env!("CARGO_PKG_VERSION"),
            description: "Product catalog with a create/read/update/delete/activate lifecycle",
            license: License {
                name: "MIT License",
                url: "https://opensource.org/licenses/MIT",
            },
        },
        operations: OPERATIONS,
    }
}
