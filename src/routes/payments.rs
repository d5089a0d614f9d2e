use actix_web::web::{post, scope, ServiceConfig};

use crate::handlers::payments::waafipay_confirm;

pub fn payment_route_group(conf: &mut ServiceConfig) {
    let scope = scope("/waafipay").route("/confirm", post().to(waafipay_confirm));

    conf.service(scope);
}
