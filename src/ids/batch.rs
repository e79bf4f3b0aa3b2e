//! Batch resource IDs.

crate::define_resource_id! {
    /// A Batch account.
    AccountId("batch_account", "Account") in "Microsoft.Batch" {
        batch_account_name: "batchAccounts",
    }
}

crate::define_resource_id! {
    /// An application registered with a Batch account.
    ApplicationId("batch_application", "Application") in "Microsoft.Batch" {
        batch_account_name: "batchAccounts",
        name: "applications",
    }
}

crate::define_resource_id! {
    /// A certificate held by a Batch account.
    CertificateId("batch_certificate", "Certificate") in "Microsoft.Batch" {
        batch_account_name: "batchAccounts",
        name: "certificates",
    }
}

crate::define_resource_id! {
    /// A Batch pool.
    PoolId("batch_pool", "Pool") in "Microsoft.Batch" {
        batch_account_name: "batchAccounts",
        name: "pools",
    }
}

crate::define_resource_id! {
    /// A job running on a Batch pool.
    JobId("batch_job", "Job") in "Microsoft.Batch" {
        batch_account_name: "batchAccounts",
        pool_name: "pools",
        name: "jobs",
    }
}
