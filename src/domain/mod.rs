// Domain layer: models, the release catalog and ports. No process or HTTP code here.

pub mod model;
pub mod ports;
pub mod release;
