pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod app_store_receipts_datasource;
        pub(crate) mod utils;
    }
    pub(crate) mod models {
        pub(crate) mod app_store_server_notifications {
            pub(crate) mod response_body_v1_model;
        }
        pub(crate) mod common;
        pub(crate) mod verify_receipt {
            pub(crate) mod in_app_purchase_transaction_model;
            pub(crate) mod pending_renewal_info_model;
            pub(crate) mod receipt_model;
            pub(crate) mod response_body_model;
        }
    }
    pub(crate) mod repositories {
        pub(crate) mod receipts_repository_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod apple_date;
        pub mod common;
        pub mod pending_renewal_info;
        pub mod receipt;
        pub mod server_notification;
        pub mod transaction;
        pub mod verify_receipt_result;
        pub mod verify_receipt_status;
    }
    pub mod repositories {
        pub mod receipts_repository;
    }
}

pub mod constants;
pub mod errors;
pub mod util;
