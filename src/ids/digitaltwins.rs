//! Digital Twins resource IDs.

crate::define_resource_id! {
    /// A Digital Twins instance.
    DigitalTwinsInstanceId("digital_twins_instance", "Digital Twins Instance") in "Microsoft.DigitalTwins" {
        name: "digitalTwinsInstances",
    }
}

crate::define_resource_id! {
    /// An endpoint of a Digital Twins instance.
    DigitalTwinsEndpointId("digital_twins_endpoint", "Digital Twins Endpoint") in "Microsoft.DigitalTwins" {
        digital_twins_instance_name: "digitalTwinsInstances",
        endpoint_name: "endpoints",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResourceId;

    #[test]
    fn test_digital_twins_instance_id() {
        let input = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/group1/providers/Microsoft.DigitalTwins/digitalTwinsInstances/instance1";
        let id = DigitalTwinsInstanceId::parse(input).unwrap();
        assert_eq!(id.name, "instance1");
        assert_eq!(id.id(), input);

        // Lower-cased segment names are only accepted insensitively
        let lower = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/group1/providers/Microsoft.DigitalTwins/digitaltwinsinstances/instance1";
        assert!(DigitalTwinsInstanceId::parse(lower).is_err());
        assert_eq!(
            DigitalTwinsInstanceId::parse_insensitively(lower).unwrap(),
            id
        );
    }

    #[test]
    fn test_digital_twins_endpoint_id() {
        let id = DigitalTwinsEndpointId::new(
            "12345678-1234-9876-4563-123456789012",
            "group1",
            "instance1",
            "endpoint1",
        );
        assert_eq!(
            id.id(),
            "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/group1/providers/Microsoft.DigitalTwins/digitalTwinsInstances/instance1/endpoints/endpoint1"
        );
        assert_eq!(
            id.describe(),
            "Digital Twins Endpoint: (Endpoint Name \"endpoint1\" / Digital Twins Instance Name \"instance1\" / Resource Group \"group1\")"
        );

        let err = DigitalTwinsEndpointId::parse(
            "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/group1/providers/Microsoft.DigitalTwins/digitalTwinsInstances/instance1",
        )
        .unwrap_err();
        assert_eq!(err.message(), "endpoints");
    }
}
