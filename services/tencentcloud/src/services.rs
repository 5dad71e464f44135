//! Typed clients for the supported services.
//!
//! Each client is declared as a table of method name to action name; every
//! method forwards to [`Client::call`] with the client's service name.

use crate::{Client, Params};
use qcloud_core::{Error, Result};

macro_rules! service_client {
    (
        $(#[$meta:meta])*
        $name:ident, $service:literal, $ctor:ident {
            $($method:ident => $action:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            client: Client,
            default_profile: Option<String>,
        }

        impl $name {
            /// Service name used in the endpoint and credential scope.
            pub const SERVICE: &'static str = $service;

            /// Method name to action name table of this client.
            pub const ACTIONS: &'static [(&'static str, &'static str)] =
                &[$((stringify!($method), $action),)*];

            /// Create a new client on top of `client`.
            pub fn new(client: Client) -> Self {
                Self {
                    client,
                    default_profile: None,
                }
            }

            /// Set the profile used when a call names none.
            ///
            /// It takes precedence over the default profile of the inner client.
            pub fn with_default_profile(mut self, profile: impl Into<String>) -> Self {
                self.default_profile = Some(profile.into());
                self
            }

            /// The profile used when a call names none.
            pub fn default_profile(&self) -> Option<&str> {
                self.default_profile
                    .as_deref()
                    .or(self.client.default_profile())
            }

            /// Call an action of this service by name.
            pub async fn request(
                &self,
                action: &str,
                params: Params,
                profile: Option<&str>,
            ) -> Result<Params> {
                let profile = profile.or(self.default_profile.as_deref());
                self.client.call($service, action, params, profile).await
            }

            $(
                #[doc = concat!("Call `", $action, "`.")]
                pub async fn $method(&self, params: Params, profile: Option<&str>) -> Result<Params> {
                    self.request($action, params, profile).await
                }
            )*
        }

        impl Client {
            #[doc = concat!("Build a [`", stringify!($name), "`], the `", $service, "` service must be configured.")]
            pub fn $ctor(&self) -> Result<$name> {
                if !self.config().has_service($service) {
                    return Err(Error::missing_config(concat!("services.", $service)));
                }
                Ok($name::new(self.clone()))
            }
        }
    };
}

service_client! {
    /// Client for OCR (document and card recognition).
    OcrClient, "ocr", ocr {
        general_basic_ocr => "GeneralBasicOCR",
        id_card_ocr => "IdCardOCR",
        bank_card_ocr => "BankCardOCR",
        driver_license_ocr => "DriverLicenseOCR",
        vehicle_license_ocr => "VehicleLicenseOCR",
        biz_license_ocr => "BizLicenseOCR",
        passport_ocr => "PassportOCR",
        permit_ocr => "PermitOCR",
        residence_booklet_ocr => "ResidenceBookletOCR",
        real_estate_ocr => "RealEstateOCR",
        property_ocr => "PropertyOCR",
        table_ocr => "TableOCR",
        general_table_ocr => "GeneralTableOCR",
        general_invoice_ocr => "GeneralInvoiceOCR",
        vat_invoice_ocr => "VatInvoiceOCR",
        waybill_ocr => "WaybillOCR",
        general_machine_invoice_ocr => "GeneralMachineInvoiceOCR",
        flight_invoice_ocr => "FlightInvoiceOCR",
        train_ticket_ocr => "TrainTicketOCR",
        taxi_invoice_ocr => "TaxiInvoiceOCR",
        quota_invoice_ocr => "QuotaInvoiceOCR",
        ship_invoice_ocr => "ShipInvoiceOCR",
        bus_invoice_ocr => "BusInvoiceOCR",
        toll_invoice_ocr => "TollInvoiceOCR",
    }
}

service_client! {
    /// Client for FaceID (identity verification).
    FaceIdClient, "faceid", faceid {
        face_verification => "FaceVerification",
        id_card_verification => "IdCardVerification",
        bank_card_verification => "BankCardVerification",
        mobile_network_time_verification => "MobileNetworkTimeVerification",
        mobile_status_verification => "MobileStatusVerification",
        get_action_sequence => "GetActionSequence",
        get_action_sequence_enhanced => "GetActionSequenceEnhanced",
    }
}

service_client! {
    /// Client for Captcha (captcha validation and statistics).
    CaptchaClient, "captcha", captcha {
        describe_captcha_result => "DescribeCaptchaResult",
        describe_captcha_data => "DescribeCaptchaData",
        describe_captcha_data_sum => "DescribeCaptchaDataSum",
        describe_captcha_app_id_info => "DescribeCaptchaAppIdInfo",
        describe_captcha_user_all_app_id => "DescribeCaptchaUserAllAppId",
        describe_captcha_mini_data => "DescribeCaptchaMiniData",
        describe_captcha_mini_data_sum => "DescribeCaptchaMiniDataSum",
        describe_captcha_mini_app_id_info => "DescribeCaptchaMiniAppIdInfo",
        describe_captcha_mini_user_all_app_id => "DescribeCaptchaMiniUserAllAppId",
        describe_captcha_mini_result => "DescribeCaptchaMiniResult",
        describe_captcha_mini_result_sum => "DescribeCaptchaMiniResultSum",
    }
}
