use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        customers::{CustomerList, CustomerPayload},
        orders::{OrderPayload, OrderWithProducts},
        products::{ProductList, ProductPayload},
    },
    models::{Customer, Order, Product},
    response::ApiResponse,
    routes::{customers, health, home, orders, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        home::home,
        health::health_check,
        customers::list_customers,
        customers::get_customer,
        customers::create_customer,
        customers::update_customer,
        customers::delete_customer,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        orders::create_order,
        orders::get_order_items,
    ),
    components(
        schemas(
            Customer,
            Product,
            Order,
            CustomerPayload,
            ProductPayload,
            OrderPayload,
            CustomerList,
            ProductList,
            OrderWithProducts,
            ApiResponse<Customer>,
            ApiResponse<CustomerList>,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<OrderWithProducts>
        )
    ),
    tags(
        (name = "Home", description = "Banner endpoint"),
        (name = "Health", description = "Health check endpoint"),
        (name = "Customers", description = "Customer endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Orders", description = "Order endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
