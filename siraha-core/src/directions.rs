use url::Url;

use crate::entities::GeoPoint;

const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/";

/// Link that opens turn-by-turn directions to `destination`
/// in an external maps application.
pub fn directions_url(destination: GeoPoint) -> Url {
    let mut url = Url::parse(DIRECTIONS_BASE_URL).expect("valid directions base URL");
    // The comma of "lat,lng" must not be percent-encoded,
    // so the query is assembled manually.
    let (lat, lng) = destination.to_lat_lng_deg();
    url.set_query(Some(&format!("api=1&destination={lat},{lng}")));
    url
}
