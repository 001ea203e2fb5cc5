use crate::api::{
    employee::{self, CREATE_FAILED, UPDATE_FAILED},
    error::ApiError,
};
use actix_web::{error::JsonPayloadError, web};
use tracing::error;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Body that does not deserialize gets the same 500 as any other failure
    fn json_config(message: &'static str) -> web::JsonConfig {
        web::JsonConfig::default().error_handler(move |err: JsonPayloadError, _req| {
            error!(error = %err, "{}", message);
            ApiError::new(message).into()
        })
    }

    cfg.service(web::resource("/").route(web::get().to(employee::list_employees)))
        .service(web::resource("/employee/{id}").route(web::get().to(employee::get_employee)))
        .service(
            web::resource("/send-data")
                .app_data(json_config(CREATE_FAILED))
                .route(web::post().to(employee::create_employee)),
        )
        .service(
            web::resource("/delete/{id}").route(web::delete().to(employee::delete_employee)),
        )
        .service(
            web::resource("/update")
                .app_data(json_config(UPDATE_FAILED))
                .route(web::patch().to(employee::update_employee)),
        );
}
