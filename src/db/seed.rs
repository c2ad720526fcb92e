use crate::models::NewMovie;

/// The fixed catalog inserted into an empty store
pub fn seed_movies() -> Vec<NewMovie> {
    vec![
        NewMovie {
            title: "Inception".to_string(),
            description: "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.".to_string(),
            poster_url: "https://m.media-amazon.com/images/M/MV5BMjAxMzY3NjcxNF5BMl5BanBnXkFtZTcwNTI5OTM0Mw@@._V1_SX300.jpg".to_string(),
            genre: "Action, Adventure, Sci-Fi".to_string(),
            rating: 88,
            release_year: 2010,
        },
        NewMovie {
            title: "The Dark Knight".to_string(),
            description: "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.".to_string(),
            poster_url: "https://m.media-amazon.com/images/M/MV5BMTMxNTMwODM0NF5BMl5BanBnXkFtZTcwODAyMTk2Mw@@._V1_SX300.jpg".to_string(),
            genre: "Action, Crime, Drama".to_string(),
            rating: 90,
            release_year: 2008,
        },
        NewMovie {
            title: "Interstellar".to_string(),
            description: "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.".to_string(),
            poster_url: "https://m.media-amazon.com/images/M/MV5BZjdkOTU3MDktN2IxOS00OGEyLWFmMjktY2FiMmZkNWIyODZiXkEyXkFqcGdeQXVyMTMxODk2OTU@._V1_SX300.jpg".to_string(),
            genre: "Adventure, Drama, Sci-Fi".to_string(),
            rating: 86,
            release_year: 2014,
        },
        NewMovie {
            title: "The Matrix".to_string(),
            description: "A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.".to_string(),
            poster_url: "https://m.media-amazon.com/images/M/MV5BNzQzOTk3OTAtNDQ0Zi00ZTVkLWI0MTEtMDllZjNkYzNjNTc4L2ltYWdlXkEyXkFqcGdeQXVyNjU0OTQ0OTY@._V1_SX300.jpg".to_string(),
            genre: "Action, Sci-Fi".to_string(),
            rating: 87,
            release_year: 1999,
        },
        NewMovie {
            title: "Pulp Fiction".to_string(),
            description: "The lives of two mob hitmen, a boxer, a gangster and his wife, and a pair of diner bandits intertwine in four tales of violence and redemption.".to_string(),
            poster_url: "https://m.media-amazon.com/images/M/MV5BNGNhMDIzZTUtNTBlZi00MTRlLWFjM2ItYzViMjE3YzI5MjljXkEyXkFqcGdeQXVyNzkwMjQ5NzM@._V1_SX300.jpg".to_string(),
            genre: "Crime, Drama".to_string(),
            rating: 89,
            release_year: 1994,
        },
    ]
}
