use actix_web::{get, web, HttpMessage, HttpRequest, HttpResponse, Responder};

use crate::{
    listing::FeaturedCourses,
    models::user::Session,
    schema::NavbarQuery,
    views::{card::CourseCardView, home::HomePageView, navbar::Navbar},
    GlobalState,
};

async fn load_featured(data:&GlobalState) -> FeaturedCourses {
    let mut listing = FeaturedCourses::new(data.featured_limit);
    listing.load(data.courses.as_ref()).await;
    listing
}

#[get("/home")]
pub async fn home_page_handler(data:web::Data<GlobalState>) -> impl Responder {
    let listing = load_featured(&data).await;

    HttpResponse::Ok().json(HomePageView::render(listing.state(), &data.prices))
}

#[get("/courses")]
pub async fn featured_courses_handler(data:web::Data<GlobalState>) -> impl Responder {
    let listing = load_featured(&data).await;

    let cards = listing.state().courses().iter()
        .map(|course| CourseCardView::render(course, &data.prices))
        .collect::<Vec<CourseCardView>>();

    HttpResponse::Ok().json(cards)
}

#[get("/navbar")]
pub async fn navbar_handler(query:web::Query<NavbarQuery>, req:HttpRequest) -> impl Responder {
    let session = req.extensions().get::<Session>().cloned().unwrap_or_default();

    let navbar = Navbar::with_toggles(session, query.menu_open, query.profile_open);

    HttpResponse::Ok().json(navbar.render())
}
