//! Integration tests for the use-case layer over the in-memory adapter.
//!
//! Tests: ProductService -> ProductRepository port -> InMemoryProductRepository

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use catalog_products::{
        CreateProductCommand, ProductError, ProductId, ProductService, ProductStatus,
        UpdateProductCommand,
    };

    use crate::repository::InMemoryProductRepository;

    fn setup() -> (
        ProductService<Arc<InMemoryProductRepository>>,
        Arc<InMemoryProductRepository>,
    ) {
        let repo = Arc::new(InMemoryProductRepository::new());
        (ProductService::new(repo.clone()), repo)
    }

    #[test]
    fn full_lifecycle_through_in_memory_store() {
        let (service, repo) = setup();

        let created = service
            .create_product(CreateProductCommand::new("Widget", 9.99))
            .unwrap();
        let id = created.id_typed();
        assert_eq!(repo.len(), 1);

        let updated = service
            .update_product(&id, UpdateProductCommand::price(12.50))
            .unwrap();
        assert_eq!(updated.name(), "Widget");
        assert_eq!(updated.price().amount(), 12.50);

        assert_eq!(
            service.deactivate_product(&id).unwrap().status(),
            ProductStatus::Inactive
        );
        assert_eq!(
            service.find_product(&id).unwrap().status(),
            ProductStatus::Inactive
        );
        assert_eq!(
            service.activate_product(&id).unwrap().status(),
            ProductStatus::Active
        );

        service.delete_product(&id).unwrap();
        assert!(repo.is_empty());
        assert_eq!(service.find_product(&id), Err(ProductError::NotFound(id)));
    }

    #[test]
    fn rejected_operations_leave_store_untouched() {
        let (service, repo) = setup();

        assert!(service
            .create_product(CreateProductCommand::new("", 5.00))
            .is_err());
        assert!(service
            .create_product(CreateProductCommand::new("Gadget", -1.00))
            .is_err());
        assert!(repo.is_empty());

        let created = service
            .create_product(CreateProductCommand::new("Gadget", 1.00))
            .unwrap();
        let err = service
            .update_product(&created.id_typed(), UpdateProductCommand::name("  "))
            .unwrap_err();
        assert!(matches!(err, ProductError::InvalidProduct(_)));
        assert_eq!(service.find_product(&created.id_typed()).unwrap(), created);
    }

    #[test]
    fn products_are_isolated_by_id() {
        let (service, _repo) = setup();
        let a = service
            .create_product(CreateProductCommand::new("A", 1.0))
            .unwrap();
        let b = service
            .create_product(CreateProductCommand::new("B", 2.0))
            .unwrap();

        service.deactivate_product(&a.id_typed()).unwrap();
        service.delete_product(&a.id_typed()).unwrap();

        assert_eq!(service.find_product(&b.id_typed()).unwrap(), b);
        assert_eq!(service.find_all_products().unwrap(), vec![b]);
        let missing = ProductId::new();
        assert_eq!(
            service.activate_product(&missing),
            Err(ProductError::NotFound(missing))
        );
    }
}
