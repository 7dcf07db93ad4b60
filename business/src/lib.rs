pub mod application {
    pub mod recommendation {
        pub mod list;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod catalog {
        pub mod services;
    }
    pub mod recommendation {
        pub mod errors;
        pub mod model;
        pub mod selection;
        pub mod use_cases {
            pub mod list;
        }
    }
}
