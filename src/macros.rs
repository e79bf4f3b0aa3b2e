//! Macro for defining typed resource IDs.

/// Define a typed resource ID scoped to a resource group.
///
/// This generates a struct with `subscription_id`, `resource_group` and one
/// `String` field per declared segment, plus:
/// - `RESOURCE_TYPE` constant and a `new()` constructor
/// - a [`ResourceId`](crate::ResourceId) implementation backed by a lazily
///   built [`ResourceIdSchema`](crate::ResourceIdSchema)
/// - `Display` (canonical ID) and `FromStr` (strict parse)
/// - `Serialize` and `Deserialize` as the canonical ID string
///
/// # Example
///
/// ```ignore
/// define_resource_id! {
///     /// A Synapse SQL pool.
///     SqlPoolId("synapse_sql_pool", "Sql Pool") in "Microsoft.Synapse" {
///         workspace_name: "workspaces",
///         name: "sqlPools",
///     }
/// }
///
/// let id = SqlPoolId::new("sub", "rg", "ws", "pool");
/// let parsed: SqlPoolId = id.to_string().parse()?;
/// ```
#[macro_export]
macro_rules! define_resource_id {
    (
        $(#[$meta:meta])*
        $name:ident($resource_type:literal, $display_name:literal) $(in $namespace:literal)? {
            $($field:ident: $key:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            /// Value of the `subscriptions` segment.
            pub subscription_id: String,
            /// Value of the `resourceGroups` segment.
            pub resource_group: String,
            $(
                #[doc = concat!("Value of the `", $key, "` segment.")]
                pub $field: String,
            )*
        }

        impl $name {
            /// The registry key of this resource type.
            pub const RESOURCE_TYPE: &'static str = $resource_type;

            /// Create an ID from values already known to the caller.
            #[must_use]
            pub fn new(
                subscription_id: impl Into<String>,
                resource_group: impl Into<String>,
                $($field: impl Into<String>,)*
            ) -> Self {
                Self {
                    subscription_id: subscription_id.into(),
                    resource_group: resource_group.into(),
                    $($field: $field.into(),)*
                }
            }
        }

        impl $crate::ResourceId for $name {
            fn schema() -> &'static $crate::ResourceIdSchema {
                static SCHEMA: ::std::sync::LazyLock<$crate::ResourceIdSchema> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::ResourceIdSchema::resource_group_scoped(
                            $resource_type,
                            $display_name,
                        )
                            $(.with_provider($namespace))?
                            $(.with_child($key, stringify!($field)))*
                    });
                &SCHEMA
            }

            fn from_parsed(
                mut parsed: $crate::ParsedResourceId,
            ) -> ::std::result::Result<Self, $crate::IdError> {
                parsed.expect_type($resource_type)?;
                Ok(Self {
                    subscription_id: parsed.take("subscription_id")?,
                    resource_group: parsed.take("resource_group")?,
                    $($field: parsed.take(stringify!($field))?,)*
                })
            }

            fn segment_values(&self) -> Vec<&str> {
                vec![
                    self.subscription_id.as_str(),
                    self.resource_group.as_str(),
                    $(self.$field.as_str(),)*
                ]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::ResourceId::id(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::ResourceId>::parse(s)
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                serializer.serialize_str(&$crate::ResourceId::id(self))
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let s = <String as $crate::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::ResourceId>::parse(&s)
                    .map_err(<D::Error as $crate::serde::de::Error>::custom)
            }
        }
    };
}
