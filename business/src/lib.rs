pub mod application {
    pub(crate) mod remote;
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod session {
        pub mod login;
    }
    pub mod store {
        pub mod catalog_store;
        pub mod session_store;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod form;
        pub mod gateway;
        pub mod model;
        pub mod value_objects;
        pub mod views;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod session {
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod login;
        }
    }
    pub mod shared {
        pub mod request_state;
        pub mod value_objects;
    }
}

#[cfg(test)]
pub(crate) mod test_support;
