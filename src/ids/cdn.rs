//! CDN resource IDs.

crate::define_resource_id! {
    /// A CDN profile.
    ProfileId("cdn_profile", "Profile") in "Microsoft.Cdn" {
        name: "profiles",
    }
}

crate::define_resource_id! {
    /// An endpoint within a CDN profile.
    EndpointId("cdn_endpoint", "Endpoint") in "Microsoft.Cdn" {
        profile_name: "profiles",
        name: "endpoints",
    }
}

crate::define_resource_id! {
    /// A custom domain attached to a CDN endpoint.
    CustomDomainId("cdn_custom_domain", "Custom Domain") in "Microsoft.Cdn" {
        profile_name: "profiles",
        endpoint_name: "endpoints",
        name: "customDomains",
    }
}
