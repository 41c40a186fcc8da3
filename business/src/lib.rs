pub mod application {
    pub mod plate {
        pub mod create;
        pub mod get_active_by_restaurant;
        pub mod ownership;
        pub mod set_active;
        pub mod update;
    }
    pub mod restaurant {
        pub mod create;
        pub mod get_all;
        pub mod get_by_id;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod plate {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod get_active_by_restaurant;
            pub mod set_active;
            pub mod update;
        }
    }
    pub mod restaurant {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod validation;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod shared {
        pub mod pagination;
        pub mod value_objects;
    }
    pub mod user {
        pub mod services;
    }
}
